use std::io;
use std::time::Duration;

use thiserror::Error;

/// Library-wide error type for sdkc operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file exists but could not be parsed.
    #[error("Failed to parse config '{path}': {details}")]
    ConfigParse { path: String, details: String },

    /// Component identifier is invalid.
    #[error(
        "Invalid component identifier '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidComponentId(String),

    /// Component version token is invalid.
    #[error("Invalid component version '{0}': must be a non-empty token")]
    InvalidVersion(String),

    /// The catalog lists the same component more than once.
    #[error("Catalog lists component '{0}' more than once")]
    DuplicateComponent(String),

    /// The component catalog could not be obtained or decoded.
    ///
    /// `transient` marks failures worth retrying (timeouts, refused connections,
    /// 408/429/5xx). `retry_after` carries a server-requested delay.
    #[error("Component catalog unavailable from {origin}: {message}")]
    CatalogUnavailable {
        origin: String,
        message: String,
        status: Option<u16>,
        transient: bool,
        retry_after: Option<Duration>,
    },

    /// The local installation manifest is unreadable or inconsistent.
    #[error("Installation manifest '{path}' is corrupt: {reason}")]
    LocalManifestCorrupt { path: String, reason: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn catalog_unavailable<S: Into<String>, M: Into<String>>(
        origin: S,
        message: M,
    ) -> Self {
        AppError::CatalogUnavailable {
            origin: origin.into(),
            message: message.into(),
            status: None,
            transient: false,
            retry_after: None,
        }
    }

    /// Whether retrying the operation may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::CatalogUnavailable { transient: true, .. })
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ConfigParse { .. }
            | AppError::InvalidComponentId(_)
            | AppError::InvalidVersion(_)
            | AppError::DuplicateComponent(_) => io::ErrorKind::InvalidInput,
            AppError::LocalManifestCorrupt { .. } => io::ErrorKind::InvalidData,
            AppError::CatalogUnavailable { .. } => io::ErrorKind::Other,
        }
    }
}
