use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyHopError {
    #[error("Layout Error: a keyboard needs at least one row")]
    EmptyLayout,

    #[error("Layout Error: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type KhResult<T> = Result<T, KeyHopError>;
