//! High-level pipeline API: fetch the IPCA table, then reshape it.
//!
//! # Example
//!
//! ```rust,ignore
//! use ipca::{ipca_monthly, Settings, SidraClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SidraClient::from_settings(&Settings::from_env()?)?;
//!     let records = ipca_monthly(&client).await?;
//!     println!("{} months", records.len());
//!     Ok(())
//! }
//! ```

use tracing::{info, warn};

use super::ipca::transform_table;
use crate::error::{PipelineError, PipelineResult};
use crate::models::NormalizedRecord;
use crate::sidra::{SidraQuery, TableFetcher};

/// Fetch the fixed IPCA query and return the monthly-variation records.
///
/// Every call goes upstream; nothing is kept between calls.
pub async fn ipca_monthly(fetcher: &dyn TableFetcher) -> PipelineResult<Vec<NormalizedRecord>> {
    fetch_and_transform(fetcher, &SidraQuery::ipca_monthly()).await
}

/// Fetch `query` and run the IPCA transformation on the result.
pub async fn fetch_and_transform(
    fetcher: &dyn TableFetcher,
    query: &SidraQuery,
) -> PipelineResult<Vec<NormalizedRecord>> {
    let table = fetcher.fetch_table(query).await.map_err(|e| {
        warn!(error = %e, "fetch failed");
        PipelineError::from(e)
    })?;

    let records = transform_table(&table).map_err(|e| {
        warn!(error = %e, "transform failed");
        PipelineError::from(e)
    })?;

    info!(
        data_rows = table.data_len(),
        records = records.len(),
        "IPCA table transformed"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, FetchResult};
    use crate::models::{RawRow, RawTable, UPSTREAM_MONTHLY};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns a canned table and records the queries it was asked for.
    struct CannedFetcher {
        table: RawTable,
        queries: Mutex<Vec<SidraQuery>>,
    }

    impl CannedFetcher {
        fn new(rows: Vec<RawRow>) -> Self {
            let mut all = vec![RawRow::new("Valor", "Mês (Código)", "Variável")];
            all.extend(rows);
            Self {
                table: RawTable::new(all),
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TableFetcher for CannedFetcher {
        async fn fetch_table(&self, query: &SidraQuery) -> FetchResult<RawTable> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(self.table.clone())
        }
    }

    struct DownFetcher;

    #[async_trait]
    impl TableFetcher for DownFetcher {
        async fn fetch_table(&self, _query: &SidraQuery) -> FetchResult<RawTable> {
            Err(FetchError::Status {
                status: 503,
                body: "Service Unavailable".into(),
            })
        }
    }

    #[tokio::test]
    async fn test_ipca_monthly_uses_fixed_query() {
        let fetcher = CannedFetcher::new(vec![RawRow::new("0.42", "202403", UPSTREAM_MONTHLY)]);

        let records = ipca_monthly(&fetcher).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "01/03/2024");
        assert_eq!(
            fetcher.queries.lock().unwrap().as_slice(),
            [SidraQuery::ipca_monthly()]
        );
    }

    #[tokio::test]
    async fn test_each_call_refetches() {
        let fetcher = CannedFetcher::new(vec![]);
        ipca_monthly(&fetcher).await.unwrap();
        ipca_monthly(&fetcher).await.unwrap();
        assert_eq!(fetcher.queries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let err = ipca_monthly(&DownFetcher).await.unwrap_err();
        assert!(matches!(err, PipelineError::Fetch(FetchError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_parse_error_propagates() {
        let fetcher = CannedFetcher::new(vec![RawRow::new("abc", "202403", UPSTREAM_MONTHLY)]);
        let err = ipca_monthly(&fetcher).await.unwrap_err();
        assert!(matches!(err, PipelineError::Transform(_)));
    }
}
