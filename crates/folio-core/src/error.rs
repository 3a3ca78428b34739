//! Error types for folio-core
//!
//! Validation failures are not errors in this sense: they are values
//! (see [`crate::validation::FieldError`]) written back to the page.

use thiserror::Error;

/// Top-level error type for page setup
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Preference store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Required element not found: {0}")]
    MissingElement(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::Io(err.to_string())
    }
}

/// Errors raised by a [`crate::store::PreferenceStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error reading or writing the backing file
    #[error("I/O error: {0}")]
    Io(String),

    /// Error encoding the preference map
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error decoding the preference map
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Storage is disabled for this session
    #[error("Preference storage is unavailable")]
    Unavailable,
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Errors in a [`crate::config::PageConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Reveal threshold must be within [0, 1], got {0}")]
    Threshold(f64),

    #[error("Tagline interval must be non-zero")]
    ZeroInterval,

    #[error("Tagline fade ({fade_ms} ms) must be shorter than the interval ({interval_ms} ms)")]
    FadeTooLong { fade_ms: u64, interval_ms: u64 },

    #[error("Theme key must not be empty")]
    EmptyThemeKey,
}

/// Result alias for page setup
pub type Result<T> = std::result::Result<T, FolioError>;
