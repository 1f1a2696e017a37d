use eco_types::PostId;

/// Errors from content store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A comment referenced a post that does not exist.
    #[error("post not found: {0}")]
    PostNotFound(PostId),

    /// The store lock was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
