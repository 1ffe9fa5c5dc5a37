use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the collections in this crate.
///
/// Every variant reports a violated precondition. Nothing here is transient,
/// so retrying the same call on the same state fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was absent or out of range, e.g. `try_enqueue(None)`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Removal or sampling was attempted on a collection with no items.
    #[error("queue underflow: collection is empty")]
    EmptyCollection,
}
