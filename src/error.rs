use thiserror::Error;

/// Failures surfaced by [`Tree`][crate::Tree] and [`Traversal`][crate::Traversal].
///
/// Lookups that simply miss (a `search` for a missing element, `remove_min` on an
/// empty tree) are not errors and return `None` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The tree has no elements, so there is no root node to hand out.
    #[error("tree is empty - no root node exists")]
    EmptyTree,
    /// A traversal was advanced after yielding its last element.
    #[error("no more elements in traversal")]
    Exhausted,
}

/// Result type for fallible tree and traversal operations.
pub type Result<T> = std::result::Result<T, Error>;
