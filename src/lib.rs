//! Priority queue with updatable priorities, implemented as a binary min-heap
//! plus a map from each element to its slot in the heap array.
//!
//! ```
//! use mapped_queue::MappedHeap;
//!
//! let mut queue = MappedHeap::from_vec(vec![5, 3, 8, 1]).unwrap();
//! queue.update(&8, 0).unwrap();
//! queue.remove(&3).unwrap();
//! assert_eq!(queue.pop(), Ok(0));
//! assert_eq!(queue.pop(), Ok(1));
//! assert_eq!(queue.pop(), Ok(5));
//! ```

mod entry;
mod error;
mod heap;

#[cfg(feature = "node")]
mod binding;

pub use entry::Entry;
pub use error::{MappedQueueError, Result};
pub use heap::MappedHeap;
