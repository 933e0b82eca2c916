//! Coordinator error types.

use thiserror::Error;

/// Failures that escape [`FetchCoordinator::execute`](crate::FetchCoordinator::execute).
///
/// Remote fetch failures never appear here; they are delivered to the
/// error callback. Only local cache failures propagate to the caller.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    /// Reading the local cache failed.
    #[error("cache read failed: {0}")]
    CacheRead(#[source] anyhow::Error),

    /// Writing a fetched entity back to the local cache failed.
    ///
    /// The success callback for that entity has already run.
    #[error("cache write-back failed: {0}")]
    WriteBack(#[source] anyhow::Error),
}

impl CoordinatorError {
    /// Check if this is a write-back failure.
    pub fn is_write_back(&self) -> bool {
        matches!(self, CoordinatorError::WriteBack(_))
    }
}
