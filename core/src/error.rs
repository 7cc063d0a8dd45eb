use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("El archivo CSV debe contener las columnas 'Año' y 'Mes'.")]
    MissingDateColumns,

    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    #[error("Branch '{branch}' not present in the data")]
    UnknownBranch { branch: String },

    #[error("Product '{product}' has zero total units sold")]
    ZeroUnits { product: String },

    #[error("Product '{product}' has zero total revenue")]
    ZeroRevenue { product: String },

    #[error("Not enough data to fit a trend for '{product}': {points} points")]
    InsufficientData { product: String, points: usize },

    #[error("Invalid date {year}-{month}")]
    InvalidDate { year: i32, month: u32 },

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
