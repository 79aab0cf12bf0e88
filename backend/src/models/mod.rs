//! Domain models for the IPCA pipeline.
//!
//! - [`RawRow`] - One upstream SIDRA row, string-typed
//! - [`RawTable`] - The upstream result, header row included
//! - [`NormalizedRecord`] - One served observation

use serde::{Deserialize, Serialize};

// =============================================================================
// Variable labels
// =============================================================================

/// Upstream label of the monthly variation series.
pub const UPSTREAM_MONTHLY: &str = "IPCA - Variação mensal";

/// Upstream label of the year-to-date accumulated variation series.
pub const UPSTREAM_YEAR_TO_DATE: &str = "IPCA - Variação acumulada no ano";

/// Display label for the monthly variation.
pub const MONTHLY_LABEL: &str = "Var. mensal (%)";

/// Display label for the year-to-date accumulated variation.
pub const YEAR_TO_DATE_LABEL: &str = "Var. acumulada no ano (%)";

/// Map an upstream variable label to its display label.
///
/// Labels without a display name are returned unchanged.
pub fn display_label(upstream: &str) -> &str {
    match upstream {
        UPSTREAM_MONTHLY => MONTHLY_LABEL,
        UPSTREAM_YEAR_TO_DATE => YEAR_TO_DATE_LABEL,
        other => other,
    }
}

// =============================================================================
// Raw upstream data
// =============================================================================

/// A single row of the SIDRA values API.
///
/// Only the three columns the pipeline reads are kept; SIDRA sends every
/// field as a string, including numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRow {
    /// Observation (`V`), e.g. `"0.42"`.
    #[serde(rename = "V")]
    pub value: String,

    /// Period code (`D2C`), `YYYYMM`.
    #[serde(rename = "D2C")]
    pub date_code: String,

    /// Variable name (`D3N`).
    #[serde(rename = "D3N")]
    pub variable_name: String,
}

impl RawRow {
    pub fn new(
        value: impl Into<String>,
        date_code: impl Into<String>,
        variable_name: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            date_code: date_code.into(),
            variable_name: variable_name.into(),
        }
    }
}

/// Upstream table as returned by SIDRA.
///
/// Row 0 holds column labels ("Valor", "Mês (Código)", ...) when the query
/// asks for a header; it is never data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    /// Rows after the header row, paired with their index in the table.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &RawRow)> {
        self.rows.iter().enumerate().skip(1)
    }

    /// Number of data rows (header excluded).
    pub fn data_len(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

// =============================================================================
// Output
// =============================================================================

/// One observation as served by `GET /ipca/mensal`.
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedRecord {
    pub variable: String,
    pub value: f64,
    /// `dd/mm/yyyy`
    pub date: String,
    /// `YYYY-MM`
    #[serde(rename = "Mes-ano")]
    pub month_year: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_mapping() {
        assert_eq!(display_label("IPCA - Variação mensal"), "Var. mensal (%)");
        assert_eq!(
            display_label("IPCA - Variação acumulada no ano"),
            "Var. acumulada no ano (%)"
        );
    }

    #[test]
    fn test_display_label_passthrough() {
        let label = "IPCA - Variação acumulada em 12 meses";
        assert_eq!(display_label(label), label);
    }

    #[test]
    fn test_raw_row_ignores_extra_columns() {
        let json = r#"{"NC":"1","V":"0.42","D2C":"202403","D2N":"março 2024","D3N":"IPCA - Variação mensal"}"#;
        let row: RawRow = serde_json::from_str(json).unwrap();
        assert_eq!(row, RawRow::new("0.42", "202403", "IPCA - Variação mensal"));
    }

    #[test]
    fn test_raw_row_missing_column_fails() {
        let json = r#"{"V":"0.42","D3N":"IPCA - Variação mensal"}"#;
        assert!(serde_json::from_str::<RawRow>(json).is_err());
    }

    #[test]
    fn test_data_rows_skip_header() {
        let table = RawTable::new(vec![
            RawRow::new("Valor", "Mês (Código)", "Variável"),
            RawRow::new("0.42", "202403", UPSTREAM_MONTHLY),
        ]);
        let rows: Vec<_> = table.data_rows().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 1);
        assert_eq!(table.data_len(), 1);
        assert_eq!(RawTable::default().data_len(), 0);
    }

    #[test]
    fn test_record_key_order() {
        let record = NormalizedRecord {
            variable: MONTHLY_LABEL.into(),
            value: 0.42,
            date: "01/03/2024".into(),
            month_year: "2024-03".into(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"variable":"Var. mensal (%)","value":0.42,"date":"01/03/2024","Mes-ano":"2024-03"}"#
        );
    }
}
