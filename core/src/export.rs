//! Statistics CSV export and its reader.

use crate::{
    error::{ReportError, ReportResult},
    stats::ProductStats,
};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

pub const STATS_HEADER: [&str; 4] = [
    "Producto",
    "Precio_Promedio",
    "Margen_Promedio",
    "Unidades_Vendidas",
];

#[derive(Debug, Serialize, Deserialize)]
struct StatsRow {
    #[serde(rename = "Producto")]
    product: String,
    #[serde(rename = "Precio_Promedio")]
    average_price: f64,
    #[serde(rename = "Margen_Promedio")]
    average_margin_pct: f64,
    #[serde(rename = "Unidades_Vendidas")]
    total_units: f64,
}

impl From<&ProductStats> for StatsRow {
    fn from(s: &ProductStats) -> Self {
        Self {
            product: s.product.clone(),
            average_price: s.average_price,
            average_margin_pct: s.average_margin_pct,
            total_units: s.total_units,
        }
    }
}

impl From<StatsRow> for ProductStats {
    fn from(row: StatsRow) -> Self {
        Self {
            product: row.product,
            average_price: row.average_price,
            average_margin_pct: row.average_margin_pct,
            total_units: row.total_units,
        }
    }
}

/// Write the statistics table. The header is written even when `stats` is empty.
pub fn write_stats_csv<W: Write>(stats: &[ProductStats], writer: W) -> ReportResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(STATS_HEADER)?;
    for s in stats {
        wtr.serialize(StatsRow::from(s))?;
    }
    wtr.flush()?;
    Ok(())
}

/// The statistics table as UTF-8 bytes.
pub fn stats_to_csv(stats: &[ProductStats]) -> ReportResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_stats_csv(stats, &mut buf)?;
    Ok(buf)
}

/// Parse a previously exported statistics table.
pub fn read_stats_csv<R: Read>(reader: R) -> ReportResult<Vec<ProductStats>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    rdr.deserialize::<StatsRow>()
        .map(|row| {
            row.map(ProductStats::from).map_err(|e| ReportError::InvalidRecord {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            })
        })
        .collect()
}
