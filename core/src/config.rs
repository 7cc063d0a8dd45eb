use crate::types::STATS_FILE_NAME;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Prefix used when formatting average prices.
    pub currency_symbol: String,
    /// File name of the exported statistics CSV.
    pub stats_file_name: String,
    /// Also write `report.json` next to the other artifacts.
    pub write_json: bool,
    pub chart: ChartConfig,
    pub generator: GeneratorConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            stats_file_name: STATS_FILE_NAME.into(),
            write_json: false,
            chart: ChartConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Load a config file. Fields absent from the file keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ReportConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.chart.width < 200 || self.chart.height < 150 {
            anyhow::bail!(
                "chart size {}x{} is too small (minimum 200x150)",
                self.chart.width,
                self.chart.height
            );
        }
        if self.stats_file_name.trim().is_empty() {
            anyhow::bail!("stats_file_name must not be empty");
        }
        self.generator.validate()
    }
}

// ── Charts ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// RGB of the monthly sales line.
    pub sales_color: (u8, u8, u8),
    /// RGB of the dashed trend line.
    pub trend_color: (u8, u8, u8),
    pub dash_length: u32,
    pub dash_spacing: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub trend_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            sales_color: (31, 119, 180),
            trend_color: (255, 0, 0),
            dash_length: 8,
            dash_spacing: 6,
            title: "Evolución de Ventas Mensual".into(),
            x_label: "Año-Mes".into(),
            y_label: "Unidades vendidas".into(),
            trend_label: "Tendencia".into(),
        }
    }
}

// ── Sample data ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductProfile {
    pub name: String,
    pub unit_price: f64,
    /// Units sold in the first month, per branch.
    pub base_units: f64,
    /// Units added (or removed) each month.
    pub monthly_growth: f64,
    /// Cost as a fraction of revenue.
    pub cost_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub branches: Vec<String>,
    pub products: Vec<ProductProfile>,
    pub start_year: i32,
    pub start_month: u32,
    pub months: u32,
    /// Relative amplitude of the uniform noise applied to units and prices.
    pub noise: f64,
}

impl GeneratorConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.branches.is_empty() || self.products.is_empty() {
            anyhow::bail!("generator needs at least one branch and one product");
        }
        if !(1..=12).contains(&self.start_month) {
            anyhow::bail!("generator start_month {} is not in 1..=12", self.start_month);
        }
        if !(0.0..1.0).contains(&self.noise) {
            anyhow::bail!("generator noise {} must be in [0, 1)", self.noise);
        }
        for p in &self.products {
            if p.unit_price <= 0.0 || !(0.0..1.0).contains(&p.cost_ratio) {
                anyhow::bail!("product '{}' needs unit_price > 0 and cost_ratio in [0, 1)", p.name);
            }
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let product = |name: &str, unit_price, base_units, monthly_growth, cost_ratio| {
            ProductProfile {
                name: name.into(),
                unit_price,
                base_units,
                monthly_growth,
                cost_ratio,
            }
        };
        Self {
            branches: vec![
                "Sucursal Norte".into(),
                "Sucursal Sur".into(),
                "Sucursal Centro".into(),
            ],
            products: vec![
                product("Coca Cola", 1_450.0, 900.0, 12.0, 0.62),
                product("Fanta", 1_300.0, 420.0, -4.0, 0.58),
                product("Pepsi", 1_350.0, 610.0, 6.5, 0.60),
                product("Sprite", 1_280.0, 380.0, 2.0, 0.57),
                product("7 Up", 1_250.0, 250.0, -1.5, 0.55),
            ],
            start_year: 2020,
            start_month: 1,
            months: 48,
            noise: 0.12,
        }
    }
}
