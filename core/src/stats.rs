//! Per-product aggregate statistics.
//!
//! Products are reported in ascending name order. A product whose
//! units or revenue sum to zero aborts the whole computation; the
//! caller never sees a partial list.

use crate::{
    error::{ReportError, ReportResult},
    record::SaleRecord,
    types::Product,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    pub product: Product,
    /// Σ revenue / Σ units.
    pub average_price: f64,
    /// (Σ revenue − Σ cost) / Σ revenue × 100.
    pub average_margin_pct: f64,
    /// Σ units, unrounded.
    pub total_units: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    units: f64,
    revenue: f64,
    cost: f64,
}

impl Totals {
    fn add(&mut self, r: &SaleRecord) {
        self.units += r.units_sold;
        self.revenue += r.total_revenue;
        self.cost += r.total_cost;
    }

    fn finish(self, product: &str) -> ReportResult<ProductStats> {
        if self.units == 0.0 {
            return Err(ReportError::ZeroUnits {
                product: product.to_string(),
            });
        }
        if self.revenue == 0.0 {
            return Err(ReportError::ZeroRevenue {
                product: product.to_string(),
            });
        }
        Ok(ProductStats {
            product: product.to_string(),
            average_price: self.revenue / self.units,
            average_margin_pct: (self.revenue - self.cost) / self.revenue * 100.0,
            total_units: self.units,
        })
    }
}

/// Group records by product and compute each group's statistics.
pub fn compute_product_stats(records: &[SaleRecord]) -> ReportResult<Vec<ProductStats>> {
    let mut groups: BTreeMap<&str, Totals> = BTreeMap::new();
    for r in records {
        groups.entry(r.product.as_str()).or_default().add(r);
    }

    let stats = groups
        .into_iter()
        .map(|(product, totals)| totals.finish(product))
        .collect::<ReportResult<Vec<_>>>()?;

    for s in &stats {
        debug!(
            "{}: price {:.2}, margin {:.1}%, units {}",
            s.product, s.average_price, s.average_margin_pct, s.total_units
        );
    }
    Ok(stats)
}
