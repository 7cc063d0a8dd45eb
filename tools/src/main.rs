//! sales-report: per-product sales statistics and monthly trends by branch.
//!
//! Usage:
//!   sales-report report --input ventas.csv --branch "Sucursal Norte" --out reporte
//!   sales-report branches --input ventas.csv
//!   sales-report stats --input ventas.csv > estadisticas_producto.csv
//!   sales-report generate --seed 42 --out ventas.csv

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sales_core::{
    config::ReportConfig,
    error::ReportError,
    export::write_stats_csv,
    filter::branch_choices,
    generator::{generate_sales, write_sales_csv},
    loader::load_sales_file,
    record::SaleRecord,
    report::{build_report, write_artifacts, ReportRequest, SalesReport},
    types::ALL_BRANCHES,
};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sales statistics and trends by branch", long_about = None)]
struct Cli {
    /// JSON config file; defaults apply to anything it leaves out.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write statistics CSV, charts and dashboard for one branch choice.
    Report {
        #[arg(long)]
        input: String,
        #[arg(long, default_value = ALL_BRANCHES)]
        branch: String,
        #[arg(long, default_value = "reporte")]
        out: PathBuf,
        /// Also write report.json.
        #[arg(long)]
        json: bool,
    },
    /// List the branch choices found in the input.
    Branches {
        #[arg(long)]
        input: String,
    },
    /// Print the statistics CSV to stdout.
    Stats {
        #[arg(long)]
        input: String,
        #[arg(long, default_value = ALL_BRANCHES)]
        branch: String,
    },
    /// Generate a synthetic sales CSV.
    Generate {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => {
            log::info!("using config {path}");
            ReportConfig::load(path)?
        }
        None => ReportConfig::default(),
    };

    match cli.command {
        Command::Report {
            input,
            branch,
            out,
            json,
        } => {
            config.write_json |= json;
            let records = load(&input)?;
            let report = build_report(&records, &ReportRequest::for_choice(&branch), &config)?;
            let paths = write_artifacts(&report, &out, &config)
                .with_context(|| format!("writing artifacts to {}", out.display()))?;
            print_summary(&report);
            println!();
            println!("  statistics: {}", paths.stats_csv.display());
            println!("  dashboard:  {}", paths.dashboard.display());
            println!("  charts:     {}", paths.charts.len());
            if let Some(json) = &paths.json {
                println!("  json:       {}", json.display());
            }
        }
        Command::Branches { input } => {
            let records = load(&input)?;
            for choice in branch_choices(&records) {
                println!("{choice}");
            }
        }
        Command::Stats { input, branch } => {
            let records = load(&input)?;
            let report = build_report(&records, &ReportRequest::for_choice(&branch), &config)?;
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_stats_csv(&report.stats, &mut handle)?;
            handle.flush()?;
        }
        Command::Generate { out, seed } => {
            let records = generate_sales(&config.generator, seed)?;
            let file = std::fs::File::create(&out)
                .with_context(|| format!("creating {}", out.display()))?;
            write_sales_csv(&records, file)?;
            println!("wrote {} rows to {}", records.len(), out.display());
        }
    }

    Ok(())
}

fn load(input: &str) -> Result<Vec<SaleRecord>> {
    // The missing Año/Mes message is shown as-is, without path context.
    let records = load_sales_file(input).map_err(|e| match e {
        ReportError::MissingDateColumns => anyhow::Error::new(ReportError::MissingDateColumns),
        other => anyhow::Error::new(other).context(format!("loading {input}")),
    })?;
    Ok(records)
}

fn print_summary(report: &SalesReport) {
    println!("=== {} ===", report.title);
    for panel in &report.panels {
        println!(
            "  {:<20} | Precio: {:>12} | Margen: {:>5} | Unidades: {:>12} | Tendencia: {:+.3}/día",
            panel.stats.product,
            panel.metrics.average_price,
            panel.metrics.average_margin,
            panel.metrics.total_units,
            panel.trend.fit.slope,
        );
    }
}
