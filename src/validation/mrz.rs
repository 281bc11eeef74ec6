use log::{debug, info};
use regex::Captures;

use crate::models::rules::TD3_REGEX;
use crate::models::{FieldSpec, MrzRecord, FILLER};
use crate::processing::extractors::MrzExtractor;
use crate::processing::noise::restore_alpha;
use crate::utils::{PassportError, Result};

/// Splits a flattened TD3 zone into its sixteen fields.
pub struct MrzParser;

impl MrzParser {
    /// Extract the zone from OCR blocks and decode it.
    pub fn extract_record<S: AsRef<str>>(ocr_texts: &[S]) -> Result<MrzRecord> {
        let zone = MrzExtractor::extract_mrz(ocr_texts).ok_or(PassportError::MrzNotFound)?;
        info!("Recovered MRZ of {} characters", zone.chars().count());
        Self::parse(&zone)
    }

    /// Decode a flattened zone. The layout must match from the first character.
    pub fn parse(zone: &str) -> Result<MrzRecord> {
        let captures = TD3_REGEX.captures(zone).ok_or(PassportError::MrzNotFound)?;
        let field = |name: &str| Self::decode_field(&captures, name);

        let record = MrzRecord {
            passport_indicator: field("passport_indicator"),
            passport_type: field("passport_type"),
            issuing_country: field("issuing_country"),
            surname: field("surname"),
            names: field("names"),
            passport_number: field("passport_number"),
            passport_number_check_digit: field("passport_number_check_digit"),
            nationality: field("nationality"),
            date_of_birth: field("date_of_birth"),
            birth_check_digit: field("birth_check_digit"),
            sex: field("sex"),
            expiration_date: field("expiration_date"),
            expiration_date_check_digit: field("expiration_date_check_digit"),
            personal_number: field("personal_number"),
            personal_number_check_digit: field("personal_number_check_digit"),
            check_digit: field("check_digit"),
        };
        debug!("Decoded MRZ record:\n{}", record);
        Ok(record)
    }

    fn decode_field(captures: &Captures, name: &str) -> String {
        let raw = captures.name(name).map(|m| m.as_str()).unwrap_or_default();
        let value = raw.trim_matches(FILLER);
        match FieldSpec::lookup(name) {
            Some(spec) if spec.class.is_alphabetic() => restore_alpha(value),
            _ => value.to_string(),
        }
    }
}
