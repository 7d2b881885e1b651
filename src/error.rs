//! The error type shared by all fallible tree operations.

/// Errors reported by [`SplayTree`](crate::splay::SplayTree) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SplayError {
    /// The operation exists in the interface but is deliberately unsupported.
    /// Returned by both forms of `erase`.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
    /// `check_structure` found a broken invariant. This is a bug in the tree
    /// itself, never a problem with user input.
    #[error("inconsistent tree structure: {0}")]
    InconsistentStructure(String),
}

pub type Result<T> = std::result::Result<T, SplayError>;
