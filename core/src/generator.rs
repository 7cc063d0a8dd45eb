//! Synthetic sales data in the input CSV format.
//!
//! Units follow a per-product linear trend with uniform noise; revenue
//! is units × a jittered unit price and cost a jittered share of revenue.

use crate::{
    config::GeneratorConfig,
    error::ReportResult,
    record::{SaleRecord, REQUIRED_COLUMNS},
    rng::SampleRng,
};
use log::info;
use std::io::Write;

pub fn generate_sales(config: &GeneratorConfig, seed: u64) -> ReportResult<Vec<SaleRecord>> {
    config.validate()?;

    let mut records = Vec::new();

    for (b, branch) in config.branches.iter().enumerate() {
        for (p, product) in config.products.iter().enumerate() {
            let stream = (b * config.products.len() + p) as u64;
            let mut rng = SampleRng::new(seed, stream);

            for step in 0..config.months {
                let month_index = config.start_month - 1 + step;
                let year = config.start_year + (month_index / 12) as i32;
                let month = month_index % 12 + 1;

                let expected = product.base_units + product.monthly_growth * step as f64;
                let units = (expected * (1.0 + rng.jitter(config.noise))).round().max(1.0);
                let price = product.unit_price * (1.0 + rng.jitter(config.noise / 4.0));
                let total_revenue = round_cents(units * price);
                let cost_ratio = product.cost_ratio * (1.0 + rng.jitter(config.noise / 2.0));
                let total_cost = round_cents(total_revenue * cost_ratio.min(0.99));

                records.push(SaleRecord {
                    branch: branch.clone(),
                    product: product.name.clone(),
                    year,
                    month,
                    units_sold: units,
                    total_revenue,
                    total_cost,
                });
            }
        }
    }

    info!(
        "generated {} rows for {} branches and {} products (seed {seed})",
        records.len(),
        config.branches.len(),
        config.products.len()
    );
    Ok(records)
}

/// Write records with the input CSV header.
pub fn write_sales_csv<W: Write>(records: &[SaleRecord], writer: W) -> ReportResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(REQUIRED_COLUMNS)?;
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
