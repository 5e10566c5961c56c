use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A `(priority, key)` pair, the usual element type for a
/// [`MappedHeap`](crate::MappedHeap).
///
/// Lower priorities pop first. Ties are broken by `key`, so every distinct
/// entry has a distinct position in the order.
#[cfg_attr(feature = "node", napi_derive::napi(object))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub priority: f64,
    pub key: String,
}

impl Entry {
    pub fn new(priority: f64, key: impl Into<String>) -> Self {
        Self {
            priority,
            key: key.into(),
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // total_cmp keeps NaN and signed zeros well ordered
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal under total_cmp means equal bit patterns.
        self.priority.to_bits().hash(state);
        self.key.hash(state);
    }
}
