//! SIDRA fetcher.
//!
//! Retrieves raw tables from the IBGE SIDRA values API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ipca::sidra::{SidraClient, SidraQuery, TableFetcher};
//!
//! let client = SidraClient::from_settings(&Settings::from_env()?)?;
//! let table = client.fetch_table(&SidraQuery::ipca_monthly()).await?;
//! ```

pub mod query;

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::{ConfigResult, FetchError, FetchResult};
use crate::models::RawTable;

pub use query::{SidraQuery, DEFAULT_BASE_URL, IPCA_PERIOD, IPCA_TABLE, IPCA_VARIABLES};

/// Longest upstream error body kept in [`FetchError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Capability to retrieve a raw SIDRA table.
///
/// The HTTP handler receives one of these instead of reaching for a global
/// client, so tests can swap in canned tables.
#[async_trait]
pub trait TableFetcher: Send + Sync {
    async fn fetch_table(&self, query: &SidraQuery) -> FetchResult<RawTable>;
}

/// reqwest-backed SIDRA client.
#[derive(Debug, Clone)]
pub struct SidraClient {
    http: reqwest::Client,
    base_url: String,
}

impl SidraClient {
    /// Create a client against `base_url` with a request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ConfigResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ipca/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Create a client from loaded settings.
    pub fn from_settings(settings: &Settings) -> ConfigResult<Self> {
        Self::new(settings.sidra_base_url.clone(), settings.http_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TableFetcher for SidraClient {
    async fn fetch_table(&self, query: &SidraQuery) -> FetchResult<RawTable> {
        let url = query.url(&self.base_url);
        debug!(%url, "requesting SIDRA table");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "SIDRA request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let table = parse_raw_table(&body)?;
        info!(table = %query.table, rows = table.rows.len(), "received SIDRA table");
        Ok(table)
    }
}

/// Decode a SIDRA JSON response body.
pub fn parse_raw_table(body: &str) -> FetchResult<RawTable> {
    Ok(serde_json::from_str(body)?)
}

/// Load a SIDRA response saved to disk.
pub fn read_raw_table(path: &Path) -> FetchResult<RawTable> {
    let content = std::fs::read_to_string(path)?;
    parse_raw_table(&content)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
