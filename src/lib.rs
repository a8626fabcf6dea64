//! This crate exposes an owned, ordered, duplicate-free Binary Search Tree (BST)
//! with snapshot traversals in all three depth-first orders.
//!
//! ## Binary Search Tree
//!
//! A BST is built out of `Node`s. Each `Node` stores one element and may own a
//! left and a right child `Node`. The tree is kept searchable by two rules:
//!
//! 1. Every element in a `Node`'s left subtree is less than the `Node`'s own
//!    element.
//! 2. Every element in a `Node`'s right subtree is greater than the `Node`'s
//!    own element.
//!
//! > A `Node` with no children is called a "leaf".
//!
//! Searching, adding, and removing the smallest or largest element each walk a
//! single path from the root, so they cost `O(height)`. Visiting the left
//! subtree, then the node, then the right subtree yields the elements in sorted
//! order.
//!
//! ## This tree
//!
//! [`Tree`] keeps each distinct element once: adding an element equal to one
//! already stored is rejected. It does no balancing, so the height depends
//! entirely on insertion order. [`Tree::inorder_iter`],
//! [`Tree::preorder_iter`] and [`Tree::postorder_iter`] clone the elements into
//! a [`Traversal`] up front, so a traversal never observes later changes to the
//! tree.
//!
//! ```
//! use bstree::Tree;
//!
//! let tree: Tree<_> = vec!["pear", "apple", "fig", "apple"].into_iter().collect();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.preorder_iter().next(), Some("pear"));
//! assert_eq!(tree.to_string(), "[apple, fig, pear]");
//! ```
//!
//! ## Features
//!
//! - `serde` (on by default): implements `Serialize` and `Deserialize` for
//!   [`Tree`] as the pre-order sequence of its elements. Build with
//!   `default-features = false` to leave it out.

#![deny(missing_docs)]

mod error;
mod iter;
mod node;
mod tree;

pub use crate::error::{Error, Result};
pub use crate::iter::Traversal;
pub use crate::node::Node;
pub use crate::tree::Tree;
