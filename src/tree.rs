//! An owned, unbalanced BST holding a set of elements.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.to_string(), "[]");
//!
//! assert!(tree.add(7));
//! assert!(tree.add(3));
//! assert!(tree.add(9));
//!
//! // Duplicates are rejected.
//! assert!(!tree.add(3));
//! assert_eq!(tree.len(), 3);
//!
//! assert!(tree.contains(&9));
//! assert_eq!(tree.to_string(), "[3, 7, 9]");
//!
//! // Removing the minimum hands back a detached node holding it.
//! let min = tree.remove_min().map(|n| n.into_data());
//! assert_eq!(min, Some(3));
//! assert_eq!(tree.to_string(), "[7, 9]");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::trace;

use crate::error::{Error, Result};
use crate::iter::{walk, Order, Traversal};
use crate::node::{Link, Node};

/// A Binary Search Tree storing each distinct element once. This can be used for
/// adding, searching for, and removing the smallest or largest element.
///
/// No balancing is done, so adding elements in sorted order produces a tree whose
/// height equals its length.
#[derive(Clone)]
pub struct Tree<E> {
    root: Link<E>,
    size: usize,
}

impl<E> Default for Tree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Tree<E> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<E> Tree<E> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Generates a new `Tree` holding only `data`.
    pub fn with_root(data: E) -> Self {
        Self {
            root: Some(Box::new(Node::new(data))),
            size: 1,
        }
    }

    /// The root node of the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.root().err(), Some(Error::EmptyTree));
    ///
    /// tree.add(10);
    /// tree.add(5);
    /// assert_eq!(tree.root().map(|n| *n.data()), Ok(10));
    /// ```
    pub fn root(&self) -> Result<&Node<E>> {
        self.root.as_deref().ok_or(Error::EmptyTree)
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a tree
    /// with a single element has a height of 1.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        trace!(dropped = self.size, "clearing tree");
        self.teardown();
    }

    /// Removes the smallest element from the tree, returning it in a new node with no
    /// children. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// let min = tree.remove_min().unwrap();
    /// assert_eq!(min.data(), &1);
    /// assert!(min.is_leaf());
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove_min(&mut self) -> Option<Node<E>> {
        let (new_root, min) = self.root.take()?.take_min();
        self.root = new_root;
        self.size -= 1;
        trace!(size = self.size, "removed minimum");
        Some(Node::new(min))
    }

    /// Removes the largest element from the tree, returning it in a new node with no
    /// children. Returns `None` if the tree is empty.
    pub fn remove_max(&mut self) -> Option<Node<E>> {
        let (new_root, max) = self.root.take()?.take_max();
        self.root = new_root;
        self.size -= 1;
        trace!(size = self.size, "removed maximum");
        Some(Node::new(max))
    }

    /// The smallest element in the tree, if any.
    pub fn min(&self) -> Option<&E> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.data())
    }

    /// The largest element in the tree, if any.
    pub fn max(&self) -> Option<&E> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.data())
    }

    /// Returns a snapshot of the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// let sorted: Vec<_> = tree.inorder_iter().collect();
    /// assert_eq!(sorted, vec![1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn inorder_iter(&self) -> Traversal<E>
    where
        E: Clone,
    {
        self.snapshot(Order::In)
    }

    /// Returns a snapshot of the elements with each node ahead of its subtrees, so
    /// the root comes first.
    pub fn preorder_iter(&self) -> Traversal<E>
    where
        E: Clone,
    {
        self.snapshot(Order::Pre)
    }

    /// Returns a snapshot of the elements with each node after its subtrees, so the
    /// root comes last.
    pub fn postorder_iter(&self) -> Traversal<E>
    where
        E: Clone,
    {
        self.snapshot(Order::Post)
    }

    fn snapshot(&self, order: Order) -> Traversal<E>
    where
        E: Clone,
    {
        let mut elements = Vec::with_capacity(self.size);
        walk(self.root.as_deref(), order, &mut |e: &E| elements.push(e.clone()));
        Traversal::new(elements)
    }

    /// References to the elements, visited in `order`.
    fn elements(&self, order: Order) -> Vec<&E> {
        let mut elements = Vec::with_capacity(self.size);
        walk(self.root.as_deref(), order, &mut |e| elements.push(e));
        elements
    }

    /// Drops every node without recursing, so that a list-shaped tree can't overflow
    /// the stack.
    fn teardown(&mut self) {
        let mut pending: Vec<Box<Node<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.size = 0;
    }
}

impl<E: Ord> Tree<E> {
    /// Whether the tree holds an element equal to `entry`.
    pub fn contains(&self, entry: &E) -> bool {
        self.search(entry).is_some()
    }

    /// Finds the node holding an element equal to `entry`. If there is none, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::with_root(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.data()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, entry: &E) -> Option<&Node<E>> {
        self.root.as_deref().and_then(|root| root.find(entry))
    }

    /// Adds `entry` to the tree. Returns `false`, leaving the tree unchanged, if an
    /// equal element is already present.
    ///
    /// Nothing is relinked until the empty slot for `entry` has been found, so a
    /// panicking comparison leaves the tree as it was.
    pub fn add(&mut self, entry: E) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match entry.cmp(&node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!(size = self.size, "rejected duplicate element");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Box::new(Node::new(entry)));
        self.size += 1;
        trace!(size = self.size, "added element");
        true
    }
}

impl<E: Ord> FromIterator<E> for Tree<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<E: Ord> Extend<E> for Tree<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

/// Trees are equal when they hold the same elements, whatever their shape.
impl<E: PartialEq> PartialEq for Tree<E> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.elements(Order::In) == other.elements(Order::In)
    }
}

impl<E: Eq> Eq for Tree<E> {}

impl<E: fmt::Debug> fmt::Debug for Tree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("root", &self.root)
            .finish()
    }
}

impl<E: fmt::Display> fmt::Display for Tree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.elements(Order::In).into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}

/// Serializes as the pre-order sequence of elements. Adding them back in that order
/// rebuilds a tree of the same shape.
#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for Tree<E> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.elements(Order::Pre))
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for Tree<E>
where
    E: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements: Vec<E> = serde::Deserialize::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}
