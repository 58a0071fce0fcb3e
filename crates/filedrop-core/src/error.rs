//! Unified application error types for Filedrop.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Conditions that are reported rather
//! than thrown (size rejections, soft read failures, per-item bulk failures)
//! still carry an [`AppError`] inside their report value so callers can
//! inspect the kind.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A dropped file or directory could not be resolved.
    IngestionRead,
    /// A file exceeded the configured maximum upload size.
    RejectedBySize,
    /// A listing or mutation call against the remote drive failed.
    Remote,
    /// A bulk operation target is no longer present in the current listing.
    NotFoundInListing,
    /// A directory was dropped onto a path that only accepts plain files.
    UnsupportedFolderDrop,
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A storage I/O error occurred.
    Storage,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IngestionRead => write!(f, "INGESTION_READ"),
            Self::RejectedBySize => write!(f, "REJECTED_BY_SIZE"),
            Self::Remote => write!(f, "REMOTE"),
            Self::NotFoundInListing => write!(f, "NOT_FOUND_IN_LISTING"),
            Self::UnsupportedFolderDrop => write!(f, "UNSUPPORTED_FOLDER_DROP"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Filedrop.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an ingestion read error.
    pub fn ingestion_read(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IngestionRead, message)
    }

    /// Create a size rejection error.
    pub fn rejected_by_size(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RejectedBySize, message)
    }

    /// Create a remote operation error.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Remote, message)
    }

    /// Create a not-found-in-listing error.
    pub fn not_found_in_listing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFoundInListing, message)
    }

    /// Create an unsupported folder drop error.
    pub fn unsupported_folder_drop(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedFolderDrop, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Returns `true` if this error belongs to the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl PartialEq for AppError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
