//! This crate exposes a handful of textbook containers, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! [`BinarySearchTree`] stores each value exactly once. Anything smaller than a node lives
//! somewhere beneath its left child and anything larger beneath its right child, so a lookup
//! only ever follows one path down from the root. How long that path is depends entirely on the
//! order values arrived in: nothing here rebalances, and feeding in sorted input produces a
//! single chain as deep as the tree is large. Every walk over the tree (lookup, the three
//! traversals, copying, teardown) keeps its own stack rather than recursing, so even that chain
//! is safe to work with.
//!
//! ## Dynamic Array
//!
//! [`DynamicArray`] keeps its values in one contiguous buffer and, when the buffer fills up,
//! moves them into a new one half again as large. Over many appends the total amount of copying
//! stays proportional to the final length.
//!
//! ## Stack and Queue
//!
//! [`Stack`] and [`Queue`] are thin LIFO/FIFO wrappers around a sequential container.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod array;
pub mod error;
pub mod queue;
pub mod stack;
pub mod tree;

pub use array::DynamicArray;
pub use error::{ContainerError, Result};
pub use queue::Queue;
pub use stack::Stack;
pub use tree::BinarySearchTree;
