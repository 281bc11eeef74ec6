use log::{info, warn};

use crate::models::{IdentityClaim, MrzRecord};
use crate::processing::OcrProvider;
use crate::utils::{PassportError, Result};
use crate::validation::{ClaimVerifier, MrzParser};

pub struct PassportValidator<P: OcrProvider> {
    ocr: P,
}

impl<P: OcrProvider> PassportValidator<P> {
    pub fn new(ocr: P) -> Self {
        PassportValidator { ocr }
    }

    // Main validation function that orchestrates the entire process
    pub fn validate(&self, image_data: &[u8], claim: &IdentityClaim) -> Result<MrzRecord> {
        // Step 1: OCR and MRZ decoding
        let record = self.read_document(image_data)?;

        // Step 2: Compare the entered identity with the document
        ClaimVerifier::verify(claim, &record).into_result()?;

        info!("Identity claim matches document");
        Ok(record)
    }

    /// Decode the document's MRZ without checking any claim.
    pub fn read_document(&self, image_data: &[u8]) -> Result<MrzRecord> {
        let ocr_texts = self.ocr.recognize(image_data)?;
        if ocr_texts.is_empty() {
            warn!("OCR produced no text blocks");
            return Err(PassportError::OcrUnavailable("no text blocks".to_string()));
        }

        MrzParser::extract_record(&ocr_texts)
    }
}
