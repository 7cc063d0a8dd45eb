//! CSV sales data loader.
//!
//! Header names are trimmed before use. The `Año`/`Mes` check runs
//! before any row is parsed, so a file without dates yields nothing
//! but the error.

use crate::{
    error::{ReportError, ReportResult},
    record::{SaleRecord, MONTH_COLUMN, REQUIRED_COLUMNS, YEAR_COLUMN},
};
use log::{debug, info};
use std::io::Read;

/// Load sale records from a CSV reader.
pub fn load_sales<R: Read>(reader: R) -> ReportResult<Vec<SaleRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_columns(&headers)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record: SaleRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| ReportError::InvalidRecord {
                line,
                message: e.to_string(),
            })?;
        record
            .validate()
            .map_err(|message| ReportError::InvalidRecord { line, message })?;
        records.push(record);
    }

    info!("loaded {} sale records", records.len());
    Ok(records)
}

/// Load sale records from a CSV file path.
pub fn load_sales_file(path: &str) -> ReportResult<Vec<SaleRecord>> {
    debug!("opening sales file {path}");
    let file = std::fs::File::open(path)?;
    load_sales(file)
}

fn check_columns(headers: &csv::StringRecord) -> ReportResult<()> {
    let has = |name: &str| headers.iter().any(|h| h == name);

    if !has(YEAR_COLUMN) || !has(MONTH_COLUMN) {
        return Err(ReportError::MissingDateColumns);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !has(c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ReportError::MissingColumns { columns: missing });
    }
    Ok(())
}
