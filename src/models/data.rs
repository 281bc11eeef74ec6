use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::utils::{PassportError, Result};

/// Decoded TD3 machine readable zone, one field per ICAO position group.
///
/// Check digits are carried through as read and never verified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MrzRecord {
    pub passport_indicator: String,
    pub passport_type: String,
    pub issuing_country: String,
    pub surname: String,
    pub names: String,
    pub passport_number: String,
    pub passport_number_check_digit: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub birth_check_digit: String,
    pub sex: String,
    pub expiration_date: String,
    pub expiration_date_check_digit: String,
    pub personal_number: String,
    pub personal_number_check_digit: String,
    pub check_digit: String,
}

impl MrzRecord {
    /// All fields as `(name, value)` pairs in the order they appear in the zone.
    pub fn fields(&self) -> [(&'static str, &str); 16] {
        [
            ("passport_indicator", self.passport_indicator.as_str()),
            ("passport_type", self.passport_type.as_str()),
            ("issuing_country", self.issuing_country.as_str()),
            ("surname", self.surname.as_str()),
            ("names", self.names.as_str()),
            ("passport_number", self.passport_number.as_str()),
            ("passport_number_check_digit", self.passport_number_check_digit.as_str()),
            ("nationality", self.nationality.as_str()),
            ("date_of_birth", self.date_of_birth.as_str()),
            ("birth_check_digit", self.birth_check_digit.as_str()),
            ("sex", self.sex.as_str()),
            ("expiration_date", self.expiration_date.as_str()),
            ("expiration_date_check_digit", self.expiration_date_check_digit.as_str()),
            ("personal_number", self.personal_number.as_str()),
            ("personal_number_check_digit", self.personal_number_check_digit.as_str()),
            ("check_digit", self.check_digit.as_str()),
        ]
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

impl fmt::Display for MrzRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, value) in self.fields() {
            writeln!(f, "  {}: {}", name, value)?;
        }
        Ok(())
    }
}

/// Identity data typed in by the user, checked against the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaim {
    pub name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
}

impl IdentityClaim {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, birth_date: NaiveDate) -> Self {
        IdentityClaim {
            name: name.into(),
            surname: surname.into(),
            birth_date,
        }
    }

    /// Build a claim from a `YYYY-MM-DD` birth date string.
    pub fn parse(name: &str, surname: &str, birth_date: &str) -> Result<Self> {
        let birth_date = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d")
            .map_err(|e| PassportError::InvalidDate(format!("'{}': {}", birth_date, e)))?;
        Ok(Self::new(name, surname, birth_date))
    }
}

/// The claim fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimField {
    Name,
    Surname,
    BirthDate,
}

impl ClaimField {
    pub const CHECK_ORDER: [ClaimField; 3] =
        [ClaimField::Name, ClaimField::Surname, ClaimField::BirthDate];

    /// Record field the claim is compared against.
    pub fn mrz_field(&self) -> &'static str {
        match self {
            ClaimField::Name => "names",
            ClaimField::Surname => "surname",
            ClaimField::BirthDate => "date_of_birth",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ClaimField::Name => "Entered name mismatches name on the document.",
            ClaimField::Surname => "Entered surname mismatches surname on the document.",
            ClaimField::BirthDate => "Entered birth date mismatches birth date on the document.",
        }
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClaimField::Name => write!(f, "name"),
            ClaimField::Surname => write!(f, "surname"),
            ClaimField::BirthDate => write!(f, "birth_date"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    Verified,
    /// First field in check order that disagreed.
    Mismatch(ClaimField),
}

impl VerificationResult {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationResult::Verified)
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            VerificationResult::Verified => Ok(()),
            VerificationResult::Mismatch(field) => Err(PassportError::FieldMismatch(field)),
        }
    }
}
