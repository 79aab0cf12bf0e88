//! # IPCA - Monthly inflation series over HTTP
//!
//! Fetches the IPCA table from the IBGE SIDRA API, keeps the monthly
//! variation since 2016 and serves it as JSON.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ SIDRA API   │────▶│   Fetcher   │────▶│  Transform  │────▶│ /ipca/mensal │
//! │ (table1737) │     │  (RawTable) │     │ (records)   │     │    (JSON)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ipca::{ipca_monthly, Settings, SidraClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = SidraClient::from_settings(&Settings::default()).unwrap();
//!     let records = ipca_monthly(&client).await.unwrap();
//!     println!("{} months", records.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Raw and served row types
//! - [`sidra`] - SIDRA query builder and client
//! - [`transform`] - Reshaping and the fetch + transform pipeline
//! - [`config`] - Environment settings
//! - [`logging`] - Tracing setup
//! - [`api`] - HTTP API server

// Core modules
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

// Upstream
pub mod sidra;

// Transformation
pub mod transform;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, FetchError, PipelineError, ServerError, TransformError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{display_label, NormalizedRecord, RawRow, RawTable, MONTHLY_LABEL, YEAR_TO_DATE_LABEL};

// =============================================================================
// Re-exports - Fetcher
// =============================================================================

pub use sidra::{parse_raw_table, read_raw_table, SidraClient, SidraQuery, TableFetcher};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{fetch_and_transform, ipca_monthly, transform_table};

// =============================================================================
// Re-exports - Config & API
// =============================================================================

pub use config::Settings;
pub use api::{router, AppState};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
