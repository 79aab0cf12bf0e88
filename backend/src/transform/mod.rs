//! Transformation module.
//!
//! - ipca: raw SIDRA table to monthly-variation records
//! - dates: period code parsing and display formats
//! - pipeline: fetch + transform

pub mod dates;
pub mod ipca;
pub mod pipeline;

pub use ipca::{cutoff_date, transform_table};
pub use pipeline::{fetch_and_transform, ipca_monthly};
