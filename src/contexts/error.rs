use std::fmt;

/// Custom error types for the application
#[derive(Debug, Clone)]
pub enum DatasetError {
    /// Error when a dataset name is not registered
    NotFound(String),
    /// Error when a referenced data directory doesn't exist
    DirNotFound(String),
    /// Error when a CSV file cannot be decoded
    CsvError(String),
    /// Error when storing a dataset mapping fails
    StorageError(String),
    /// IO related errors
    IoError(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::NotFound(name) => write!(f, "Dataset not found: {}", name),
            DatasetError::DirNotFound(path) => write!(f, "Data directory not found: {}", path),
            DatasetError::CsvError(msg) => write!(f, "Invalid CSV data: {}", msg),
            DatasetError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            DatasetError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::IoError(err.to_string())
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        DatasetError::CsvError(err.to_string())
    }
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
