//! Error types for replyscan
//!
//! Provides a unified error type for all binding operations.

use thiserror::Error;

/// Result type alias using ScanError
pub type Result<T> = std::result::Result<T, ScanError>;

/// Unified error type for replyscan operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    // -------------------------------------------------------------------------
    // Conversion Errors
    // -------------------------------------------------------------------------
    #[error("cannot convert from {from} to {to}")]
    TypeMismatch { from: &'static str, to: &'static str },

    #[error("cannot parse {text:?} as {target}")]
    Parse { text: String, target: &'static str },

    #[error("value {value} out of range for {target}")]
    Range { value: String, target: &'static str },

    // -------------------------------------------------------------------------
    // Sequence Shape Errors
    // -------------------------------------------------------------------------
    #[error("short sequence: {have} values for {need} destinations")]
    ShortSequence { have: usize, need: usize },

    #[error("struct scan expects an even number of values, got {0}")]
    OddLength(usize),

    #[error("struct scan key is not a bulk string (got {0})")]
    InvalidKeyType(&'static str),

    // -------------------------------------------------------------------------
    // Destination / Layout Errors
    // -------------------------------------------------------------------------
    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    #[error("unknown field flag {flag:?} for type {type_name}")]
    UnsupportedFieldTag { flag: String, type_name: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Reply Errors
    // -------------------------------------------------------------------------
    /// An error reply from the server, passed through unchanged
    #[error("{0}")]
    Reply(String),
}

/// Fieldless discriminant of [`ScanError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch,
    Parse,
    Range,
    ShortSequence,
    OddLength,
    InvalidKeyType,
    InvalidDestination,
    UnsupportedFieldTag,
    Config,
    Reply,
}

impl ScanError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ScanError::Parse { .. } => ErrorKind::Parse,
            ScanError::Range { .. } => ErrorKind::Range,
            ScanError::ShortSequence { .. } => ErrorKind::ShortSequence,
            ScanError::OddLength(_) => ErrorKind::OddLength,
            ScanError::InvalidKeyType(_) => ErrorKind::InvalidKeyType,
            ScanError::InvalidDestination(_) => ErrorKind::InvalidDestination,
            ScanError::UnsupportedFieldTag { .. } => ErrorKind::UnsupportedFieldTag,
            ScanError::Config(_) => ErrorKind::Config,
            ScanError::Reply(_) => ErrorKind::Reply,
        }
    }
}
