use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("entry '{id}' has no matching score")]
    MissingScore { id: String },

    #[error("entry '{id}' is missing required field '{field}'")]
    MissingField { id: String, field: &'static str },

    #[error("entry '{id}' has a score vector of length {len}, expected {expected}")]
    ShortVector {
        id: String,
        len: usize,
        expected: usize,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
