//! Error types for the sync client.

use std::time::Duration;

use waymark_core::StoreId;
use waymark_storage::StorageError;

/// Errors that can occur while fetching, reconciling or applying.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A store operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A snapshot fetch exceeded the configured timeout.
    #[error("Fetching snapshot from {store} timed out after {timeout:?}")]
    FetchTimeout {
        /// Which store's fetch timed out.
        store: StoreId,
        /// The configured fetch timeout.
        timeout: Duration,
    },

    /// A cached snapshot was required but the cache was never populated.
    #[error("Snapshot cache is empty; refresh the remote store first")]
    CacheEmpty,
}

impl SyncError {
    /// Returns `true` if this is a fetch timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::FetchTimeout { .. })
    }

    /// Returns `true` if this error originated in a store.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SyncError::FetchTimeout {
            store: StoreId::B,
            timeout: Duration::from_millis(250),
        };
        assert_eq!(
            err.to_string(),
            "Fetching snapshot from STORE_B timed out after 250ms"
        );
        assert!(err.is_timeout());

        assert_eq!(
            SyncError::CacheEmpty.to_string(),
            "Snapshot cache is empty; refresh the remote store first"
        );
    }

    #[test]
    fn test_storage_errors_pass_through() {
        let err: SyncError = StorageError::not_found("Base", "0_0_0_overworld").into();
        assert!(err.is_storage());
        assert_eq!(err.to_string(), "Waypoint not found: 'Base' at 0_0_0_overworld");
    }
}
