use thiserror::Error;

#[derive(Error, Debug)]
pub enum BodyMetricsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Input File: {0}")]
    InvalidInput(String),

    #[error("Invalid Measurement: {0}")]
    InvalidMeasurement(String),
}

pub type BmResult<T> = Result<T, BodyMetricsError>;
