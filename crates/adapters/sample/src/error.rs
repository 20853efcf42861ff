//! Storage-specific error type for the in-memory stores.

use robodesk_domain::error::RoboDeskError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the lock of `store`.
    #[error("{store} store lock poisoned")]
    Poisoned { store: &'static str },
}

impl From<StorageError> for RoboDeskError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
