use std::result;

use thiserror::Error;

/// Error types for paper fetching, parsing and export
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },

    /// CSV serialization failed
    #[error("CSV export failed: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = result::Result<T, PubMedError>;

impl PubMedError {
    /// Whether the error came from talking to the remote index
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PubMedError::RequestError(_) | PubMedError::ApiError { .. }
        )
    }

    /// Whether the error came from a response body that could not be understood
    pub fn is_parse(&self) -> bool {
        matches!(self, PubMedError::JsonError(_) | PubMedError::XmlError(_))
    }
}

impl From<std::io::Error> for PubMedError {
    fn from(err: std::io::Error) -> Self {
        PubMedError::IoError {
            message: err.to_string(),
        }
    }
}
