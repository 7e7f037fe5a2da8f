use thiserror::Error;

/// Failures surfaced by tree operations.
///
/// Absence is not an error here: `remove` and `contains` answer through
/// their return value. Asking a type without a usable total order for a
/// tree is rejected at compile time, so no runtime variant exists for it.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    /// `minimum` or `maximum` was asked of a tree holding no elements.
    #[error("the tree holds no elements")]
    EmptyTree,
}
