use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::{MappedQueueError, Result};

/// Min-heap over unique elements that also tracks where each element sits in
/// the heap array, so arbitrary elements can be updated or removed in
/// `O(log n)`.
///
/// The element is its own priority. Callers that need a separate payload
/// store `(priority, payload)` pairs, e.g. [`crate::Entry`].
#[derive(Debug, Clone)]
pub struct MappedHeap<T> {
    heap: Vec<T>,
    positions: HashMap<T, usize>,
}

impl<T: Ord + Hash + Clone> Default for MappedHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Hash + Clone> MappedHeap<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a heap from `data` in linear time.
    ///
    /// Fails with [`MappedQueueError::Inconsistent`] when `data` holds the
    /// same element more than once.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        let mut queue = Self {
            heap: data,
            positions: HashMap::new(),
        };
        queue.heapify()?;
        debug!("built mapped heap with {} elements", queue.heap.len());
        Ok(queue)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, elt: &T) -> bool {
        self.positions.contains_key(elt)
    }

    /// Adds `elt` to the queue. Returns `false` and leaves the queue alone if
    /// it is already present.
    pub fn push(&mut self, elt: T) -> bool {
        if self.positions.contains_key(&elt) {
            trace!("push rejected: element already queued");
            return false;
        }
        let pos = self.heap.len();
        self.positions.insert(elt.clone(), pos);
        self.heap.push(elt);
        self.sift_to_root(pos);
        true
    }

    /// Removes and returns the smallest element.
    pub fn pop(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            trace!("pop on empty queue");
            return Err(MappedQueueError::Empty);
        }
        // The tail element takes over the root slot.
        let elt = self.heap.swap_remove(0);
        self.positions.remove(&elt);
        if !self.heap.is_empty() {
            self.reindex(0);
            self.repair(0);
        }
        Ok(elt)
    }

    /// Replaces `old` with `new`, keeping the slot `old` occupied and then
    /// restoring heap order around it.
    ///
    /// Nothing is modified when `old` is missing or `new` is already queued.
    pub fn update(&mut self, old: &T, new: T) -> Result<()> {
        let pos = match self.positions.get(old) {
            Some(&pos) => pos,
            None => {
                trace!("update rejected: element not queued");
                return Err(MappedQueueError::NotFound);
            }
        };
        if new != *old && self.positions.contains_key(&new) {
            trace!("update rejected: replacement already queued");
            return Err(MappedQueueError::Duplicate);
        }
        self.positions.remove(old);
        self.positions.insert(new.clone(), pos);
        self.heap[pos] = new;
        self.repair(pos);
        Ok(())
    }

    /// Removes `elt` from anywhere in the queue.
    pub fn remove(&mut self, elt: &T) -> Result<()> {
        let pos = match self.positions.remove(elt) {
            Some(pos) => pos,
            None => {
                trace!("remove rejected: element not queued");
                return Err(MappedQueueError::NotFound);
            }
        };
        self.heap.swap_remove(pos);
        // Nothing moved when the element was in the last slot.
        if pos < self.heap.len() {
            self.reindex(pos);
            self.repair(pos);
        }
        Ok(())
    }

    fn heapify(&mut self) -> Result<()> {
        for start in (0..self.heap.len() / 2).rev() {
            let leaf = self.sift_to_leaf(start);
            self.sift_up_to(leaf, start);
        }
        self.positions = self
            .heap
            .iter()
            .enumerate()
            .map(|(pos, elt)| (elt.clone(), pos))
            .collect();
        if self.positions.len() != self.heap.len() {
            return Err(MappedQueueError::Inconsistent {
                elements: self.heap.len(),
                distinct: self.positions.len(),
            });
        }
        Ok(())
    }

    /// Restores heap order for an element that was just placed at `pos` and
    /// may belong either above or below it.
    fn repair(&mut self, pos: usize) {
        let leaf = self.sift_to_leaf(pos);
        self.sift_to_root(leaf);
    }

    /// Walks the element at `pos` down to a leaf, always swapping with the
    /// smaller child. The right child is taken only when strictly smaller than
    /// the left one.
    fn sift_to_leaf(&mut self, mut pos: usize) -> usize {
        let end = self.heap.len();
        let mut child = 2 * pos + 1;
        while child < end {
            let right = child + 1;
            if right < end && self.heap[right] < self.heap[child] {
                child = right;
            }
            self.swap(pos, child);
            pos = child;
            child = 2 * pos + 1;
        }
        pos
    }

    fn sift_to_root(&mut self, pos: usize) -> usize {
        self.sift_up_to(pos, 0)
    }

    /// Moves the element at `pos` toward `floor` while its parent is strictly
    /// greater.
    fn sift_up_to(&mut self, mut pos: usize, floor: usize) -> usize {
        while pos > floor {
            let parent = (pos - 1) / 2;
            if self.heap[parent] > self.heap[pos] {
                self.swap(parent, pos);
                pos = parent;
            } else {
                break;
            }
        }
        pos
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.reindex(a);
        self.reindex(b);
    }

    // No-op while heapify runs, since the map is rebuilt afterwards.
    fn reindex(&mut self, pos: usize) {
        if let Some(slot) = self.positions.get_mut(&self.heap[pos]) {
            *slot = pos;
        }
    }
}

impl<T: Ord + Hash + Clone> TryFrom<Vec<T>> for MappedHeap<T> {
    type Error = MappedQueueError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::from_vec(data)
    }
}
