use thiserror::Error;

use crate::models::ClaimField;

#[derive(Error, Debug)]
pub enum PassportError {
    #[error("OCR service unavailable: {0}")]
    OcrUnavailable(String),

    #[error("No machine readable zone found in OCR output")]
    MrzNotFound,

    #[error("Claim mismatch on field {0}")]
    FieldMismatch(ClaimField),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PassportError {
    /// Message suitable for showing to the person who submitted the document.
    pub fn user_message(&self) -> String {
        match self {
            PassportError::OcrUnavailable(_) => {
                "Could not validate data, because failed to call RealID API.".to_string()
            }
            PassportError::MrzNotFound => {
                "Could not validate data, because failed to parse info from image.".to_string()
            }
            PassportError::FieldMismatch(field) => field.message().to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for PassportError {
    fn from(err: reqwest::Error) -> Self {
        PassportError::OcrUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PassportError>;
