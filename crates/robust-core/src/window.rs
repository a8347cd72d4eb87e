//! Fixed-capacity sliding window
//!
//! Holds the values of the most recent `capacity` pushes in a circular
//! buffer. Pushing is O(1) and never allocates after construction.

use crate::{Error, Result};
use num_traits::Zero;

/// Circular buffer over the most recent `capacity` samples
#[derive(Debug, Clone)]
pub struct SlidingWindow<T = f64> {
    data: Vec<T>,
    head: usize,
    len: usize,
}

impl<T: Copy + Zero> SlidingWindow<T> {
    /// Create an empty window
    ///
    /// Returns an error for a zero capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_window(capacity));
        }
        Ok(Self {
            data: vec![T::zero(); capacity],
            head: 0,
            len: 0,
        })
    }

    /// Insert a value, evicting the oldest one once the window is full
    pub fn push(&mut self, value: T) {
        self.data[self.head] = value;
        self.head = (self.head + 1) % self.data.len();
        if self.len < self.data.len() {
            self.len += 1;
        }
    }

    /// Owned copy of the current contents, oldest first
    pub fn snapshot(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.snapshot_into(&mut out);
        out
    }

    /// Refill `buffer` with the current contents, oldest first
    ///
    /// The buffer keeps its allocation across calls.
    pub fn snapshot_into(&self, buffer: &mut Vec<T>) {
        buffer.clear();
        buffer.extend(self.iter());
    }

    /// Iterate over stored values, oldest first
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let capacity = self.data.len();
        let start = (self.head + capacity - self.len) % capacity;
        (0..self.len).map(move |offset| self.data[(start + offset) % capacity])
    }

    /// Number of values currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no value has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of values held
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Whether `capacity` values have been pushed
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }
}
