//! Error types for the IPCA service.
//!
//! - [`FetchError`] - Upstream SIDRA request errors
//! - [`TransformError`] - Row parsing errors while reshaping the table
//! - [`PipelineError`] - Fetch + transform orchestration errors
//! - [`ConfigError`] - Invalid environment overrides
//! - [`ServerError`] - HTTP server errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Fetch Errors
// =============================================================================

/// Errors while retrieving the raw table from SIDRA.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure (DNS, connection, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("SIDRA returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body is not a JSON array of rows with the expected columns.
    #[error("Unexpected SIDRA response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failed to read a saved table from disk.
    #[error("Failed to read table: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while parsing upstream rows.
///
/// `row` is the index in the raw table, so row 1 is the first data row.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// Period code is not a `YYYYMM` month.
    #[error("Row {row}: invalid period code '{value}'")]
    InvalidDate { row: usize, value: String },

    /// Observation is not a finite decimal number.
    #[error("Row {row}: invalid value '{value}'")]
    InvalidValue { row: usize, value: String },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Errors from one fetch + transform pass.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Upstream fetch failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// A row could not be parsed.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable holds an unusable value.
    #[error("Invalid value '{value}' for {key}: {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    /// HTTP client could not be built from the settings.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to bind or serve.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
