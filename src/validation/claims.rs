use chrono::NaiveDate;
use log::{debug, info};
use unicode_normalization::UnicodeNormalization;

use crate::models::{ClaimField, IdentityClaim, MrzRecord, VerificationResult};

/// Compares what the user entered against the decoded zone.
pub struct ClaimVerifier;

impl ClaimVerifier {
    /// Check name, surname, then birth date; stop at the first disagreement.
    pub fn verify(claim: &IdentityClaim, record: &MrzRecord) -> VerificationResult {
        for field in ClaimField::CHECK_ORDER.iter().copied() {
            let entered = Self::normalized_claim(claim, field);
            let on_document = record.get(field.mrz_field()).unwrap_or_default();
            if entered != on_document {
                info!("Claim mismatch on {}", field);
                debug!("Entered '{}', document has '{}'", entered, on_document);
                return VerificationResult::Mismatch(field);
            }
        }
        VerificationResult::Verified
    }

    fn normalized_claim(claim: &IdentityClaim, field: ClaimField) -> String {
        match field {
            ClaimField::Name => to_upper_ascii(&claim.name),
            ClaimField::Surname => to_upper_ascii(&claim.surname),
            ClaimField::BirthDate => format_birth_date(claim.birth_date),
        }
    }
}

/// Fold text to upper-case ASCII: decompose, drop what is not ASCII, upper-case.
pub fn to_upper_ascii(value: &str) -> String {
    value
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Birth date as it is written in the zone (YYMMDD).
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}
