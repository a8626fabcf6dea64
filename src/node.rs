use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An owned, possibly empty subtree.
pub(crate) type Link<E> = Option<Box<Node<E>>>;

/// A `Node` stores one element and owns up to two children.
///
/// A [`Tree`][crate::Tree] only ever lends out `&Node`s, so the links and element of
/// a node that lives in a tree cannot be changed from outside. The mutating methods
/// here are for nodes the caller owns outright, such as the detached nodes returned
/// by [`Tree::remove_min`][crate::Tree::remove_min].
///
/// Two nodes compare (and hash) equal when their *elements* do, regardless of what
/// children either of them has.
///
/// # Examples
///
/// ```
/// use bstree::Node;
///
/// let node = Node::with_children(2, Some(Node::new(1)), None);
///
/// assert_eq!(node.data(), &2);
/// assert!(node.has_left());
/// assert_eq!(node.child_count(), 1);
///
/// // Equality ignores the children.
/// assert_eq!(node, Node::new(2));
/// ```
#[derive(Clone, Debug)]
pub struct Node<E> {
    pub(crate) data: E,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
}

impl<E> Node<E> {
    /// Construct a new leaf `Node` holding `data`.
    pub fn new(data: E) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// Construct a new `Node` holding `data` with the given children.
    pub fn with_children(data: E, left: Option<Node<E>>, right: Option<Node<E>>) -> Self {
        Self {
            data,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The element stored in this node.
    pub fn data(&self) -> &E {
        &self.data
    }

    /// Consumes the node, returning its element. Any children are dropped.
    pub fn into_data(self) -> E {
        self.data
    }

    /// Replaces the element stored in this node, returning the old one.
    pub fn set_data(&mut self, data: E) -> E {
        std::mem::replace(&mut self.data, data)
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<E>> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<E>> {
        self.right.as_deref()
    }

    /// Replaces the left child, returning the previous one.
    pub fn set_left(&mut self, left: Option<Node<E>>) -> Option<Node<E>> {
        std::mem::replace(&mut self.left, left.map(Box::new)).map(|n| *n)
    }

    /// Replaces the right child, returning the previous one.
    pub fn set_right(&mut self, right: Option<Node<E>>) -> Option<Node<E>> {
        std::mem::replace(&mut self.right, right.map(Box::new)).map(|n| *n)
    }

    /// Whether this node has a left child.
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Whether this node has a right child.
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Whether this node has no children at all.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many children this node has: 0, 1, or 2.
    pub fn child_count(&self) -> usize {
        self.has_left() as usize + self.has_right() as usize
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        left.max(right) + 1
    }

    /// Returns the subtree left behind once its smallest element is removed, along
    /// with that element. The smallest node has no left child, so its right child
    /// takes its place.
    pub(crate) fn take_min(mut self: Box<Self>) -> (Link<E>, E) {
        match self.left.take() {
            None => {
                let Node { data, right, .. } = *self;
                (right, data)
            }
            Some(left) => {
                let (new_left, min) = left.take_min();
                self.left = new_left;
                (Some(self), min)
            }
        }
    }

    /// Mirror image of [`take_min`][Node::take_min].
    pub(crate) fn take_max(mut self: Box<Self>) -> (Link<E>, E) {
        match self.right.take() {
            None => {
                let Node { data, left, .. } = *self;
                (left, data)
            }
            Some(right) => {
                let (new_right, max) = right.take_max();
                self.right = new_right;
                (Some(self), max)
            }
        }
    }
}

impl<E: Ord> Node<E> {
    /// Finds the node in this subtree holding an element equal to `data`.
    pub(crate) fn find(&self, data: &E) -> Option<&Self> {
        match data.cmp(&self.data) {
            Ordering::Less => self.left().and_then(|n| n.find(data)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(data)),
        }
    }
}

impl<E: PartialEq> PartialEq for Node<E> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<E: Eq> Eq for Node<E> {}

impl<E: PartialOrd> PartialOrd for Node<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.data.partial_cmp(&other.data)
    }
}

impl<E: Ord> Ord for Node<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.cmp(&other.data)
    }
}

impl<E: Hash> Hash for Node<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<E: fmt::Display> fmt::Display for Node<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}
