//! Error types for binned statistics
//!
//! Provides a unified error type for all binstats crates.

use thiserror::Error;

/// Core error type for binning operations
#[derive(Error, Debug)]
pub enum Error {
    /// Bin configuration was empty or otherwise unusable, or a preloaded
    /// result does not describe a usable bin space
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Data was added before any bins were established
    #[error("Not configured: bins must be set before adding data")]
    NotConfigured,

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Text (de)serialization of a result failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty edge list
    pub fn empty_edges() -> Self {
        Self::InvalidConfiguration("at least one bin edge is required".to_string())
    }

    /// Create an error for a NaN bin edge
    pub fn nan_edge(position: usize) -> Self {
        Self::InvalidConfiguration(format!("bin edge at position {position} is NaN"))
    }

    /// Create an error for a preload key that does not fit the bin space
    pub fn key_mismatch(key: &str, context: &str) -> Self {
        Self::InvalidConfiguration(format!("result key {key:?} {context}"))
    }

    /// Create an error for a NaN observation
    pub fn nan_input(context: &str, position: usize) -> Self {
        Self::InvalidInput(format!("{context} at position {position} is NaN"))
    }

    /// Create an error for a bin whose count would exceed `u64::MAX`
    pub fn count_overflow(bin: impl std::fmt::Display) -> Self {
        Self::InvalidInput(format!("count of bin {bin} would overflow u64"))
    }
}
