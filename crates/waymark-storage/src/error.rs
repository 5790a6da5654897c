//! Error types for waypoint store operations.
//!
//! The reconciliation engine itself is infallible; everything that can
//! genuinely fail (store unreachable, write rejected) surfaces here.

use std::fmt;

use waymark_core::StoreId;

/// Errors that can occur while reading from or writing to a waypoint store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No record matched the operation's source id or location.
    #[error("Waypoint not found: '{name}' at {location}")]
    NotFound {
        /// Display name of the waypoint that was addressed.
        name: String,
        /// Location key the operation addressed.
        location: String,
    },

    /// A create hit a location the store already has a record at.
    #[error("Waypoint already exists: '{name}' at {location}")]
    AlreadyExists {
        /// Display name of the existing record.
        name: String,
        /// The occupied location key.
        location: String,
    },

    /// The record payload was rejected by the store.
    #[error("Invalid waypoint: {message}")]
    InvalidWaypoint {
        /// Description of why the record is invalid.
        message: String,
    },

    /// The store cannot be reached right now.
    #[error("Store {store} unavailable: {message}")]
    Unavailable {
        /// Which store could not be reached.
        store: StoreId,
        /// Description of the failure.
        message: String,
    },

    /// An internal store error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl StorageError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Creates a new `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::AlreadyExists {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Creates a new `InvalidWaypoint` error.
    #[must_use]
    pub fn invalid_waypoint(message: impl Into<String>) -> Self {
        Self::InvalidWaypoint {
            message: message.into(),
        }
    }

    /// Creates a new `Unavailable` error.
    #[must_use]
    pub fn unavailable(store: StoreId, message: impl Into<String>) -> Self {
        Self::Unavailable {
            store,
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is an already exists error.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns `true` if the store itself could not be reached.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::InvalidWaypoint { .. } => ErrorCategory::Validation,
            Self::Unavailable { .. } => ErrorCategory::Infrastructure,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Categories of storage errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Record not found.
    NotFound,
    /// Conflict with an existing record.
    Conflict,
    /// Validation error.
    Validation,
    /// Infrastructure/connection error.
    Infrastructure,
    /// Internal error.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::Validation => write!(f, "validation"),
            Self::Infrastructure => write!(f, "infrastructure"),
            Self::Internal => write!(f, "internal"),
        }
    }
}
