//! The sale record: one row of the input CSV.

use crate::types::{Branch, Product};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Column names of the input CSV, in the order they are written.
pub const BRANCH_COLUMN: &str = "Sucursal";
pub const PRODUCT_COLUMN: &str = "Producto";
pub const YEAR_COLUMN: &str = "Año";
pub const MONTH_COLUMN: &str = "Mes";
pub const UNITS_COLUMN: &str = "Unidades_vendidas";
pub const REVENUE_COLUMN: &str = "Ingreso_total";
pub const COST_COLUMN: &str = "Costo_total";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    BRANCH_COLUMN,
    PRODUCT_COLUMN,
    YEAR_COLUMN,
    MONTH_COLUMN,
    UNITS_COLUMN,
    REVENUE_COLUMN,
    COST_COLUMN,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "Sucursal")]
    pub branch: Branch,
    #[serde(rename = "Producto")]
    pub product: Product,
    #[serde(rename = "Año", deserialize_with = "deserialize_trimmed")]
    pub year: i32,
    #[serde(rename = "Mes", deserialize_with = "deserialize_trimmed")]
    pub month: u32,
    #[serde(rename = "Unidades_vendidas", deserialize_with = "deserialize_trimmed")]
    pub units_sold: f64,
    #[serde(rename = "Ingreso_total", deserialize_with = "deserialize_trimmed")]
    pub total_revenue: f64,
    #[serde(rename = "Costo_total", deserialize_with = "deserialize_trimmed")]
    pub total_cost: f64,
}

impl SaleRecord {
    /// Field-level checks the CSV types alone cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.month) {
            return Err(format!("month {} is not in 1..=12", self.month));
        }
        if !self.units_sold.is_finite() || self.units_sold < 0.0 {
            return Err(format!("units sold must be non-negative, got {}", self.units_sold));
        }
        if !self.total_revenue.is_finite() || !self.total_cost.is_finite() {
            return Err("revenue and cost must be finite".into());
        }
        Ok(())
    }
}

/// Numeric cells may carry surrounding spaces (", "-separated files).
/// String cells are kept as written.
fn deserialize_trimmed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse::<T>().map_err(|e| {
        serde::de::Error::custom(format!("invalid number '{}': {e}", s.trim()))
    })
}
