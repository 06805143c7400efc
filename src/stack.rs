//! A LIFO stack on top of [`DynamicArray`].
//!
//! # Examples
//!
//! ```
//! use containers::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1)?;
//! stack.push(2)?;
//!
//! assert_eq!(stack.peek(), Some(&2));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! # Ok::<(), containers::ContainerError>(())
//! ```

use crate::array::DynamicArray;
use crate::error::Result;

/// Last in, first out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    values: DynamicArray<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generate a new, empty `Stack`.
    pub fn new() -> Self {
        Self {
            values: DynamicArray::new(),
        }
    }

    /// Puts `value` on top of the stack. Only fails if the stack had to grow and the allocation
    /// was refused.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.values.push(value)
    }

    /// Takes the top value off the stack.
    pub fn pop(&mut self) -> Option<T> {
        self.values.pop()
    }

    /// The top value, left in place.
    pub fn peek(&self) -> Option<&T> {
        self.values.last()
    }

    /// The number of values on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
