//! Rule-set ingestion from the table-extraction pipeline.
//!
//! The pipeline exports one flat mapping per category per spouse variant,
//! either as CSV (`category,bracket,with_spouse,without_spouse`) or as a
//! JSON document carrying the same rows plus the effective date. Parsing is
//! shape-only; bracket and category validation happens when the rows are
//! assembled into [`FactorTables`](super::FactorTables).

use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;

use super::{data, TableError};

/// One flat mapping entry: a category and bracket key with its two point
/// columns.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleEntry {
    pub category: String,
    pub bracket: String,
    pub with_spouse: u32,
    pub without_spouse: u32,
}

/// Pre-extracted rule data consumed at repository construction time.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSet {
    pub effective_date: NaiveDate,
    pub rows: Vec<RuleEntry>,
}

impl RuleSet {
    /// Parse the CSV export produced by the extraction pipeline. CSV carries
    /// no metadata, so the effective date travels alongside it.
    pub fn from_csv<R: Read>(effective_date: NaiveDate, reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<RuleEntry>() {
            rows.push(record?);
        }
        Ok(Self {
            effective_date,
            rows,
        })
    }

    /// Parse the JSON export form.
    pub fn from_json(payload: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// The regulatory export bundled with the crate.
    pub fn bundled() -> Result<Self, TableError> {
        let effective_date = data::BUNDLED_EFFECTIVE
            .parse::<NaiveDate>()
            .map_err(|_| TableError::InvalidEffectiveDate(data::BUNDLED_EFFECTIVE.to_string()))?;
        Self::from_csv(effective_date, data::BUNDLED_EXPORT.as_bytes())
    }
}
