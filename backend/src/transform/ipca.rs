//! Reshape a raw SIDRA IPCA table into the served monthly records.
//!
//! Steps, in order:
//!
//! 1. drop the header row
//! 2. keep `V`, `D2C`, `D3N` as value, date, variable
//! 3. relabel the variable ([`display_label`])
//! 4. parse date (`YYYYMM`, day 1) and value (`f64`) on every data row
//! 5. keep "Var. mensal (%)" rows
//! 6. keep dates strictly after 2016-01-01
//! 7. format date as `dd/mm/yyyy`
//! 8. derive `Mes-ano` from the formatted date
//!
//! A parse failure anywhere aborts the whole table; no partial output.

use chrono::NaiveDate;

use super::dates::{format_day_month_year, month_year_of, parse_period_code};
use crate::error::{TransformError, TransformResult};
use crate::models::{display_label, NormalizedRecord, RawRow, RawTable, MONTHLY_LABEL};

/// Observations on or before this date are dropped.
pub fn cutoff_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 1, 1).expect("2016-01-01 is a valid date")
}

/// A data row after relabelling and parsing.
#[derive(Debug, Clone, PartialEq)]
struct Observation {
    row: usize,
    variable: String,
    value: f64,
    date: NaiveDate,
}

impl Observation {
    fn parse(row: usize, raw: &RawRow) -> TransformResult<Self> {
        let date = parse_period_code(&raw.date_code).ok_or_else(|| TransformError::InvalidDate {
            row,
            value: raw.date_code.clone(),
        })?;

        let value = raw
            .value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| TransformError::InvalidValue {
                row,
                value: raw.value.clone(),
            })?;

        Ok(Self {
            row,
            variable: display_label(&raw.variable_name).to_string(),
            value,
            date,
        })
    }

    fn into_record(self) -> TransformResult<NormalizedRecord> {
        let date = format_day_month_year(self.date);
        let month_year = month_year_of(&date).map_err(|_| TransformError::InvalidDate {
            row: self.row,
            value: date.clone(),
        })?;

        Ok(NormalizedRecord {
            variable: self.variable,
            value: self.value,
            date,
            month_year,
        })
    }
}

/// Transform a raw IPCA table into monthly-variation records.
///
/// Output keeps upstream row order. An empty result is not an error.
pub fn transform_table(table: &RawTable) -> TransformResult<Vec<NormalizedRecord>> {
    let observations = table
        .data_rows()
        .map(|(row, raw)| Observation::parse(row, raw))
        .collect::<TransformResult<Vec<_>>>()?;

    let cutoff = cutoff_date();

    observations
        .into_iter()
        .filter(|obs| obs.variable == MONTHLY_LABEL)
        .filter(|obs| obs.date > cutoff)
        .map(Observation::into_record)
        .collect()
}
