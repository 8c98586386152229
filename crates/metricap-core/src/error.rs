//! Shared error type across metricap crates.
//!
//! Capturing observations never fails; these errors come from the harness
//! side (config loading and scenario execution).

use thiserror::Error;

/// Stable error codes, suitable for scripting against the harness output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config is malformed or fails validation.
    BadConfig,
    /// Config declares a version this build does not understand.
    UnsupportedVersion,
    /// Filesystem failure.
    Io,
    /// Internal failure (e.g. a worker task died).
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricapError>;

/// Unified error type used by core and harness.
#[derive(Debug, Error)]
pub enum MetricapError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricapError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MetricapError::BadConfig(_) => ErrorCode::BadConfig,
            MetricapError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            MetricapError::Io(_) => ErrorCode::Io,
            MetricapError::Internal(_) => ErrorCode::Internal,
        }
    }
}
