use std::iter::FusedIterator;
use std::vec;

use crate::error::{Error, Result};
use crate::node::Node;

/// A traversal over a snapshot of a [`Tree`][crate::Tree]'s elements.
///
/// All elements are cloned into the traversal when it is created, in the order
/// the traversal visits them. Changing the tree afterwards has no effect on a
/// `Traversal` that already exists, and the other way around.
///
/// Besides being a regular [`Iterator`], a `Traversal` can be driven with
/// [`has_next`][Traversal::has_next] and [`try_next`][Traversal::try_next], which
/// reports running off the end as an [`Error::Exhausted`].
///
/// # Examples
///
/// ```
/// use bstree::{Error, Tree};
///
/// let mut tree = Tree::new();
/// tree.add(2);
/// tree.add(1);
///
/// let mut traversal = tree.inorder_iter();
/// tree.add(3);
///
/// assert_eq!(traversal.try_next(), Ok(1));
/// assert_eq!(traversal.try_next(), Ok(2));
/// assert!(!traversal.has_next());
/// assert_eq!(traversal.try_next(), Err(Error::Exhausted));
/// ```
#[derive(Clone, Debug)]
pub struct Traversal<E> {
    elements: vec::IntoIter<E>,
}

impl<E> Traversal<E> {
    pub(crate) fn new(elements: Vec<E>) -> Self {
        Self {
            elements: elements.into_iter(),
        }
    }

    /// Whether another element remains. Never advances the traversal.
    pub fn has_next(&self) -> bool {
        !self.elements.as_slice().is_empty()
    }

    /// Yields the next element, or [`Error::Exhausted`] once every element has been
    /// yielded.
    pub fn try_next(&mut self) -> Result<E> {
        self.elements.next().ok_or(Error::Exhausted)
    }
}

impl<E> Iterator for Traversal<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<E> ExactSizeIterator for Traversal<E> {}

impl<E> FusedIterator for Traversal<E> {}

/// Where a node is visited relative to its subtrees.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Order {
    /// Left subtree, node, right subtree.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

/// Visits every element of the subtree rooted at `node` in the given order.
pub(crate) fn walk<'a, E, F>(node: Option<&'a Node<E>>, order: Order, visit: &mut F)
where
    F: FnMut(&'a E),
{
    if let Some(n) = node {
        if let Order::Pre = order {
            visit(&n.data);
        }
        walk(n.left(), order, visit);
        if let Order::In = order {
            visit(&n.data);
        }
        walk(n.right(), order, visit);
        if let Order::Post = order {
            visit(&n.data);
        }
    }
}
