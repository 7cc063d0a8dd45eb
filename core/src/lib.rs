//! Branch sales reporting: load a sales CSV, filter by branch, aggregate
//! per product, fit a monthly trend, and render the results.

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod filter;
pub mod format;
pub mod generator;
pub mod loader;
pub mod record;
pub mod report;
pub mod rng;
pub mod stats;
pub mod trend;
pub mod types;
