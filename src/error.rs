//! Error types for the alma library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`AlmaError`] enum. The pipeline itself never surfaces errors to the end
//! user (storage and model failures are logged and treated as lookup misses),
//! but snapshot persistence and configuration problems are reported to the
//! caller, since silently losing learned data is worse than failing loudly.

use std::io;

use thiserror::Error;

/// The main error type for alma operations.
#[derive(Error, Debug)]
pub enum AlmaError {
    /// I/O errors (snapshot files, seed files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis errors (tokenization, stemming).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Learned-model errors (vectorization, classification, training).
    #[error("Model error: {0}")]
    Model(String),

    /// Dynamic response store errors.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Model snapshot read/write errors.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors (seed data, config files).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with [`AlmaError`].
pub type Result<T> = std::result::Result<T, AlmaError>;

impl AlmaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        AlmaError::Analysis(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        AlmaError::Model(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        AlmaError::Storage(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        AlmaError::Snapshot(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AlmaError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AlmaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        AlmaError::Other(msg.into())
    }
}

impl From<rusqlite::Error> for AlmaError {
    fn from(err: rusqlite::Error) -> Self {
        AlmaError::Storage(err.to_string())
    }
}
