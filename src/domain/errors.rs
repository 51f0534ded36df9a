/// Simplified error system - one enum for the whole dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    GenerationError(String),
    StorageError(String),
    ExportError(String),
    BrowserError(String),
    InvalidInput(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::GenerationError(msg) => write!(f, "Data Generation Error: {}", msg),
            AppError::StorageError(msg) => write!(f, "Storage Error: {}", msg),
            AppError::ExportError(msg) => write!(f, "Export Error: {}", msg),
            AppError::BrowserError(msg) => write!(f, "Browser Error: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::ExportError(err.to_string())
    }
}

// Simple convenience type aliases
pub type StorageResult<T> = Result<T, AppError>;
pub type ExportResult<T> = Result<T, AppError>;
