// src/error.rs
use thiserror::Error;

/// Errors raised while building or resolving font descriptors
///
/// Only the face name variants and configuration errors ever reach callers of
/// descriptor construction. Provider failures are absorbed by normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontInfoError {
    // Face name validation
    #[error("Face name too long: {name:?} is {len} UTF-16 units, limit is {capacity}")]
    FaceNameTooLong { name: String, len: usize, capacity: usize },

    #[error("Face name contains an embedded NUL: {name:?}")]
    EmbeddedNul { name: String },

    // Default font lookup
    #[error("No default font registered for code page {code_page}")]
    DefaultFontNotFound { code_page: u32 },

    #[error("Default font provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },

    // Configuration
    #[error("Invalid configuration: {field} = {value}")]
    ConfigurationError { field: String, value: String },
}

pub type FontInfoResult<T> = Result<T, FontInfoError>;
