use std::fmt::Write;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, info, warn};
use reqwest::blocking::Client;
use ring::digest::{digest, SHA1_FOR_LEGACY_USE_ONLY};
use serde::{Deserialize, Serialize};

use crate::utils::{OcrConfig, PassportError, Result};

/// Source of OCR text blocks for a document image.
pub trait OcrProvider {
    fn recognize(&self, image_data: &[u8]) -> Result<Vec<String>>;
}

/// Document bytes in the form the validation API expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDocument {
    pub base64: String,
    pub sha1_hex: String,
}

pub fn encode_document(image_data: &[u8]) -> EncodedDocument {
    let sha1 = digest(&SHA1_FOR_LEGACY_USE_ONLY, image_data);
    let sha1_hex = sha1.as_ref().iter().fold(String::with_capacity(40), |mut hex, byte| {
        let _ = write!(hex, "{:02x}", byte);
        hex
    });

    EncodedDocument {
        base64: STANDARD.encode(image_data),
        sha1_hex,
    }
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    document: &'a str,
    digest: &'a str,
    #[serde(rename = "type")]
    document_type: &'a str,
}

/// Body of a validation response; only the OCR output is used.
#[derive(Debug, Deserialize)]
pub struct OcrResponse {
    pub ocr_texts: Option<Vec<String>>,
}

impl OcrResponse {
    pub fn into_blocks(self) -> Result<Vec<String>> {
        match self.ocr_texts {
            Some(blocks) if !blocks.is_empty() => Ok(blocks),
            Some(_) => Err(PassportError::OcrUnavailable("response has no OCR text".to_string())),
            None => Err(PassportError::OcrUnavailable("response lacks ocr_texts".to_string())),
        }
    }
}

/// Read a saved validation response from disk.
pub fn load_ocr_response<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    let response: OcrResponse = serde_json::from_str(&raw)?;
    response.into_blocks()
}

/// Client for the RealID document validation endpoint.
pub struct RealIdClient {
    client: Client,
    config: OcrConfig,
}

impl RealIdClient {
    pub fn new(config: OcrConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PassportError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(RealIdClient { client, config })
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }
}

impl OcrProvider for RealIdClient {
    fn recognize(&self, image_data: &[u8]) -> Result<Vec<String>> {
        let encoded = encode_document(image_data);
        debug!(
            "Submitting {} byte document, sha1 {}",
            image_data.len(),
            encoded.sha1_hex
        );

        let request = ValidateRequest {
            document: &encoded.base64,
            digest: &encoded.sha1_hex,
            document_type: &self.config.document_type,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| {
                warn!("OCR request failed: {}", e);
                PassportError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("OCR service answered {}", status);
            return Err(PassportError::OcrUnavailable(format!("status {}", status)));
        }

        let body: OcrResponse = response.json().map_err(|e| {
            warn!("OCR response is not valid JSON: {}", e);
            PassportError::OcrUnavailable(format!("malformed response: {}", e))
        })?;

        let blocks = body.into_blocks()?;
        info!("OCR returned {} text block(s)", blocks.len());
        Ok(blocks)
    }
}

/// Canned OCR output, for replaying a saved response.
#[derive(Debug, Clone, Default)]
pub struct StaticOcr(pub Vec<String>);

impl OcrProvider for StaticOcr {
    fn recognize(&self, _image_data: &[u8]) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}
