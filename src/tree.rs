//! An unbalanced BST holding plain values. Every `Node` exclusively owns its two children so the
//! whole tree is a single ownership graph hanging off the root.
//!
//! # Examples
//!
//! ```
//! use containers::tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&3));
//!
//! for value in [5, 3, 8, 3, 1] {
//!     tree.insert(value);
//! }
//!
//! // The second `3` was dropped on the floor.
//! assert_eq!(tree.len(), 4);
//! assert!(tree.contains(&3));
//! assert!(!tree.contains(&9));
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [5, 3, 1, 8]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 3, 8, 5]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree without any balancing. Values are kept in sorted order and inserting a
/// value that is already present leaves the tree untouched.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.copy_nodes(),
            len: self.len,
        }
    }

    /// Releases every node currently owned by `self` before copying `source`.
    fn clone_from(&mut self, source: &Self) {
        self.destroy();
        self.root = source.copy_nodes();
        self.len = source.len;
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree. Returns `false` (and drops `value`) if an equal value was
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    log::trace!("suppressed duplicate insert into tree of {} values", self.len);
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Whether a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes every value from the tree, destroying children before their parents.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            log::debug!("clearing tree of {} values", self.len);
        }
        self.destroy();
    }

    /// Visits values in ascending order (left subtree, node, right subtree).
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Visits each node before either of its subtrees, so the root always comes first.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Visits both subtrees before their node, so the root always comes last.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self
                .root
                .as_deref()
                .map(|root| (root, false))
                .into_iter()
                .collect(),
        }
    }

    /// Tears down the node graph with an explicit stack so skewed trees don't recurse once per
    /// level. A node is only dropped once both of its subtrees are gone.
    fn destroy(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let left = node.left.take();
            let right = node.right.take();
            if left.is_some() || right.is_some() {
                stack.push(node);
                stack.extend(right);
                stack.extend(left);
            }
        }
        self.len = 0;
    }

    /// Builds a node-for-node copy of the tree. Each stack entry pairs a source node with the
    /// empty link its copy has to be placed in.
    fn copy_nodes(&self) -> Link<T>
    where
        T: Clone,
    {
        let mut root = None;
        {
            let mut stack: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
            if let Some(node) = self.root.as_deref() {
                stack.push((node, &mut root));
            }
            while let Some((node, slot)) = stack.pop() {
                let copy = slot.insert(Node::new_boxed(node.value.clone()));
                if let Some(right) = node.right.as_deref() {
                    stack.push((right, &mut copy.right));
                }
                if let Some(left) = node.left.as_deref() {
                    stack.push((left, &mut copy.left));
                }
            }
        }
        root
    }
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// In-order traversal returned by [`BinarySearchTree::in_order`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// Pre-order traversal returned by [`BinarySearchTree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is emptied before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

impl<T> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// Post-order traversal returned by [`BinarySearchTree::post_order`].
///
/// Each stack entry records whether the node's children have already been pushed. A node is only
/// yielded the second time it reaches the top of the stack.
pub struct PostOrder<'a, T> {
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

impl<T> Clone for PostOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}
