use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures statement-level failures.
#[derive(Debug, Error)]
pub enum StatementError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid reporting period: start {start} is after end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
    #[error("Persistence error: {0}")]
    Persistence(String),
}
