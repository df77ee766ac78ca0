//! # Storage Error Types
//!
//! Failures of the durable client storage boundary.
//!
//! Per the store's failure model these errors rarely reach the shopper:
//! write failures are swallowed (logged, in-memory state kept) and read
//! failures degrade to an empty cart. They are still typed so the call
//! sites can log something meaningful.

use thiserror::Error;

/// Durable client storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying file operation failed (quota, permissions, ...).
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// The cart state could not be serialized for the slot.
    #[error("could not serialize cart state: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No per-user app data directory is available on this platform.
    #[error("no writable app data directory available")]
    NoAppDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorageError::NoAppDir;
        assert_eq!(err.to_string(), "no writable app data directory available");

        let io = StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(io.to_string().contains("denied"));
    }
}
