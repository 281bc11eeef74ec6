use std::env;
use std::time::Duration;

use crate::utils::{PassportError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.identiway.com/docs/validate";
pub const DEFAULT_DOCUMENT_TYPE: &str = "lt_pass_rev";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the remote OCR service.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub endpoint: String,
    pub api_key: String,
    pub document_type: String,
    pub timeout: Duration,
}

impl OcrConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        OcrConfig {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read the configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("REALID_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| PassportError::ConfigError("REALID_API_KEY is not set".to_string()))?;

        let endpoint = lookup("REALID_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let mut config = OcrConfig::new(endpoint, api_key);

        if let Some(document_type) = lookup("REALID_DOCUMENT_TYPE") {
            config.document_type = document_type;
        }

        if let Some(raw) = lookup("REALID_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                PassportError::ConfigError(format!("REALID_TIMEOUT_SECS '{}': {}", raw, e))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
