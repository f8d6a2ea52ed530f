//! Error types for the dyntest crate
//!
//! Suite lifecycle errors (generation, setup, teardown) abort a whole run.
//! Individual case failures never surface here; they are reported through
//! the listener seam and collected in the run summary instead.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the dyntest crate
#[derive(Error, Debug)]
pub enum Error {
    // === Suite Lifecycle Errors ===
    #[error("Unknown suite '{0}'. Use 'dyntest list' to see available suites")]
    UnknownSuite(String),

    #[error("Test case generation failed: {0}")]
    Generate(String),

    #[error("Suite setup failed: {0}")]
    Setup(String),

    #[error("Suite teardown failed: {0}")]
    Teardown(String),

    #[error("Suite '{suite}' failed: {failed} of {total} cases")]
    SuiteFailed {
        suite: String,
        failed: usize,
        total: usize,
    },

    // === Browser Errors ===
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("Browser session error: {0}")]
    Browser(String),

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a browser session error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
