//! The request-scoped report pipeline.
//!
//! filter → aggregate → per-product trend, then optionally rendering
//! every artifact to a directory. Everything is computed before the
//! first file is written, so a failing request leaves no output.

use crate::{
    chart::render_trend_svg,
    config::ReportConfig,
    dashboard::render_dashboard,
    error::{ReportError, ReportResult},
    export::write_stats_csv,
    filter::{branch_choices, branches, BranchFilter},
    format::{format_margin, format_price, format_units, MetricStrings},
    record::SaleRecord,
    stats::{compute_product_stats, ProductStats},
    trend::{product_trend, ProductTrend},
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DASHBOARD_FILE_NAME: &str = "index.html";
pub const JSON_FILE_NAME: &str = "report.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub branch: BranchFilter,
}

impl ReportRequest {
    pub fn for_choice(choice: &str) -> Self {
        Self {
            branch: BranchFilter::from_choice(choice),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPanel {
    pub stats: ProductStats,
    pub metrics: MetricStrings,
    pub trend: ProductTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub title: String,
    pub branch: BranchFilter,
    pub branch_choices: Vec<String>,
    pub stats: Vec<ProductStats>,
    pub panels: Vec<ProductPanel>,
}

impl SalesReport {
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Files written by [`write_artifacts`].
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub stats_csv: PathBuf,
    pub charts: Vec<PathBuf>,
    pub dashboard: PathBuf,
    pub json: Option<PathBuf>,
}

pub fn build_report(
    records: &[SaleRecord],
    request: &ReportRequest,
    config: &ReportConfig,
) -> ReportResult<SalesReport> {
    if let BranchFilter::Only(branch) = &request.branch {
        if !branches(records).contains(branch) {
            return Err(ReportError::UnknownBranch {
                branch: branch.clone(),
            });
        }
    }

    let filtered = request.branch.apply(records);
    info!(
        "building report for {:?}: {} of {} rows",
        request.branch,
        filtered.len(),
        records.len()
    );

    let stats = compute_product_stats(&filtered)?;

    let panels = stats
        .iter()
        .map(|s| {
            debug!("fitting trend for {}", s.product);
            Ok(ProductPanel {
                stats: s.clone(),
                metrics: MetricStrings {
                    average_price: format_price(s.average_price, &config.currency_symbol),
                    average_margin: format_margin(s.average_margin_pct),
                    total_units: format_units(s.total_units),
                },
                trend: product_trend(&filtered, &s.product)?,
            })
        })
        .collect::<ReportResult<Vec<_>>>()?;

    Ok(SalesReport {
        title: request.branch.title(),
        branch: request.branch.clone(),
        branch_choices: branch_choices(records),
        stats,
        panels,
    })
}

/// File name of the chart for the panel at `index`.
pub fn chart_file_name(index: usize, product: &str) -> String {
    let slug: String = product
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("chart_{:02}_{slug}.svg", index + 1)
}

/// Render and write every artifact of `report` into `out_dir`.
pub fn write_artifacts(
    report: &SalesReport,
    out_dir: &Path,
    config: &ReportConfig,
) -> ReportResult<ArtifactPaths> {
    let charts = report
        .panels
        .iter()
        .enumerate()
        .map(|(i, panel)| {
            let svg = render_trend_svg(&panel.trend, &config.chart)?;
            Ok((chart_file_name(i, &panel.stats.product), svg))
        })
        .collect::<ReportResult<Vec<_>>>()?;
    let page = render_dashboard(report, &charts, &config.stats_file_name);
    let json = if config.write_json {
        Some(report.to_json()?)
    } else {
        None
    };

    std::fs::create_dir_all(out_dir)?;

    let stats_csv = out_dir.join(&config.stats_file_name);
    write_stats_csv(&report.stats, std::fs::File::create(&stats_csv)?)?;

    let mut chart_paths = Vec::with_capacity(charts.len());
    for (name, svg) in &charts {
        let path = out_dir.join(name);
        std::fs::write(&path, svg)?;
        chart_paths.push(path);
    }

    let dashboard = out_dir.join(DASHBOARD_FILE_NAME);
    std::fs::write(&dashboard, page)?;

    let json = match json {
        Some(body) => {
            let path = out_dir.join(JSON_FILE_NAME);
            std::fs::write(&path, body)?;
            Some(path)
        }
        None => None,
    };

    info!(
        "wrote {} charts, statistics and dashboard to {}",
        chart_paths.len(),
        out_dir.display()
    );

    Ok(ArtifactPaths {
        stats_csv,
        charts: chart_paths,
        dashboard,
        json,
    })
}
