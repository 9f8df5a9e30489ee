use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangProcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Language detection failed: {0}")]
    DetectionFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Translation failed after retries: {0}")]
    TranslationFailed(String),
}

pub type Result<T> = std::result::Result<T, LangProcError>;
