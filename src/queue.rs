//! A FIFO queue on top of [`VecDeque`].
//!
//! # Examples
//!
//! ```
//! use containers::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue("first")?;
//! queue.enqueue("second")?;
//!
//! assert_eq!(queue.dequeue(), Some("first"));
//! assert_eq!(queue.dequeue(), Some("second"));
//! assert_eq!(queue.dequeue(), None);
//! # Ok::<(), containers::ContainerError>(())
//! ```

use std::collections::VecDeque;

use crate::error::{ContainerError, Result};

/// First in, first out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    values: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            values: VecDeque::new(),
        }
    }

    /// Adds `value` to the back of the queue. Room is reserved before the value is moved in so a
    /// refused allocation comes back as an error instead of aborting.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        self.values
            .try_reserve(1)
            .map_err(|_| ContainerError::allocation_failure(self.values.len().saturating_add(1)))?;
        self.values.push_back(value);
        Ok(())
    }

    /// Removes the value at the front of the queue.
    pub fn dequeue(&mut self) -> Option<T> {
        self.values.pop_front()
    }

    /// The value at the front of the queue, left in place.
    pub fn front(&self) -> Option<&T> {
        self.values.front()
    }

    /// The number of values waiting in the queue.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
