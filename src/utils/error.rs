//! Error types for the shrinking pipeline.
//!
//! Provides the per-file error categories using `thiserror` for ergonomic
//! error handling.

use std::io;
use thiserror::Error;

/// Main error type for the shrinking pipeline.
///
/// Every per-file failure is isolated: it is logged with full detail and
/// surfaced to the user only as the fixed message for its category. A failed
/// file never aborts sibling dispatches.
#[derive(Error, Debug)]
pub enum ShrinkerError {
    /// Extension outside the supported set
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Source unreadable, output directory uncreatable, or output unwritable
    #[error("Filesystem error: {0}")]
    Filesystem(String),

    /// External compressor exited non-zero or could not be spawned
    #[error("Tool invocation error: {0}")]
    ToolInvocation(String),

    /// Malformed SVG content
    #[error("Minification error: {0}")]
    Minification(String),

    /// Invalid configuration value
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience result type for pipeline operations.
pub type ShrinkerResult<T> = Result<T, ShrinkerError>;

// Helper methods for error creation
impl ShrinkerError {
    pub fn unsupported_format<T: Into<String>>(ext: T) -> Self {
        Self::UnsupportedFormat(ext.into())
    }

    pub fn filesystem<T: Into<String>>(msg: T) -> Self {
        Self::Filesystem(msg.into())
    }

    pub fn tool<T: Into<String>>(msg: T) -> Self {
        Self::ToolInvocation(msg.into())
    }

    pub fn minification<T: Into<String>>(msg: T) -> Self {
        Self::Minification(msg.into())
    }

    pub fn settings<T: Into<String>>(msg: T) -> Self {
        Self::Settings(msg.into())
    }

    /// The fixed user-facing message for this error's category.
    ///
    /// The underlying detail is logged, never shown verbatim.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat(_) => "Only PNG, SVG, JPG and GIF allowed",
            _ => "I'm not able to write your new image. Sorry!",
        }
    }
}

// Convert std::io::Error to ShrinkerError
impl From<io::Error> for ShrinkerError {
    fn from(err: io::Error) -> Self {
        Self::Filesystem(err.to_string())
    }
}
