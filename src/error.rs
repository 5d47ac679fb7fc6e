//! Error types for the MyDuit core library.

use std::path::PathBuf;

use crate::validate::ValidationError;

/// All errors that can occur when using the MyDuit library.
///
/// The summary and zakat calculations never fail; these errors come from
/// the data-entry boundary (snapshot import, validation) and from the
/// preference storage backend.
#[derive(Debug, thiserror::Error)]
pub enum MyDuitError {
    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Preference storage backend failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn core::error::Error + Send + Sync>),

    /// A household snapshot file could not be read.
    #[error("failed to read snapshot {}: {source}", path.display())]
    SnapshotRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A record was rejected at the data-entry boundary.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MyDuitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_read_display_names_path() {
        let err = MyDuitError::SnapshotRead {
            path: PathBuf::from("/tmp/household.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/household.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn error_from_serde_json() {
        let serde_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err = MyDuitError::from(serde_err);
        assert!(matches!(err, MyDuitError::Serialization(_)));
        let msg = err.to_string();
        assert!(msg.contains("serialization error"));
    }

    #[test]
    fn error_storage_display() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = MyDuitError::Storage(Box::new(inner));
        let msg = err.to_string();
        assert!(msg.contains("storage error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn error_from_validation() {
        let err = MyDuitError::from(ValidationError::DueDateOutOfRange { due_date: 32 });
        assert!(matches!(err, MyDuitError::Validation(_)));
        assert!(err.to_string().contains("dueDate must be 1-31"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MyDuitError>();
    }
}
