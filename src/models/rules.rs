// TD3 layout rules: the fixed field table and the patterns derived from it.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// Padding and separator character of the zone.
pub const FILLER: char = '<';

/// Literal between surname and given names.
pub const NAME_SEPARATOR: &str = "<<";

/// Capture name of the separator group; it is matched but never decoded.
pub const SEPARATOR_FIELD: &str = "separator";

/// Capture name wrapping the whole matched zone.
pub const ZONE_FIELD: &str = "td3";

/// A letter, or the digit 0 that the noise pass substitutes for the letter O.
pub const ALPHA: &str = r"[^\W1-9_]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letters only, no filler.
    Alpha,
    AlphaFiller,
    /// Digits, or filler where a field is left blank.
    Numeric,
    AlphanumericFiller,
}

impl CharClass {
    pub fn pattern(self) -> &'static str {
        match self {
            CharClass::Alpha => ALPHA,
            CharClass::AlphaFiller => r"(?:[^\W1-9_]|<)",
            CharClass::Numeric => r"(?:\d|<)",
            CharClass::AlphanumericFiller => r"(?:[^\W_]|<)",
        }
    }

    pub fn is_alphabetic(self) -> bool {
        matches!(self, CharClass::Alpha | CharClass::AlphaFiller)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub min: usize,
    pub max: usize,
    pub class: CharClass,
}

impl FieldSpec {
    const fn fixed(name: &'static str, width: usize, class: CharClass) -> Self {
        FieldSpec { name, min: width, max: width, class }
    }

    const fn ranged(name: &'static str, min: usize, max: usize, class: CharClass) -> Self {
        FieldSpec { name, min, max, class }
    }

    pub fn pattern(&self) -> String {
        if self.min == self.max {
            format!("(?P<{}>{}{{{}}})", self.name, self.class.pattern(), self.min)
        } else {
            format!(
                "(?P<{}>{}{{{},{}}})",
                self.name,
                self.class.pattern(),
                self.min,
                self.max
            )
        }
    }

    pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
        TD3_FIELDS.iter().find(|spec| spec.name == name)
    }
}

/// Sixteen TD3 fields in zone order. Surname and names accept fewer characters
/// than the printed 39 because OCR tends to drop filler runs.
pub static TD3_FIELDS: [FieldSpec; 16] = [
    FieldSpec::fixed("passport_indicator", 1, CharClass::AlphaFiller),
    FieldSpec::fixed("passport_type", 1, CharClass::AlphaFiller),
    FieldSpec::fixed("issuing_country", 3, CharClass::AlphaFiller),
    FieldSpec::ranged("surname", 0, 37, CharClass::Alpha),
    FieldSpec::ranged("names", 0, 37, CharClass::AlphaFiller),
    FieldSpec::fixed("passport_number", 9, CharClass::AlphanumericFiller),
    FieldSpec::fixed("passport_number_check_digit", 1, CharClass::Numeric),
    FieldSpec::fixed("nationality", 3, CharClass::AlphaFiller),
    FieldSpec::ranged("date_of_birth", 1, 6, CharClass::Numeric),
    FieldSpec::fixed("birth_check_digit", 1, CharClass::Numeric),
    FieldSpec::fixed("sex", 1, CharClass::AlphaFiller),
    FieldSpec::fixed("expiration_date", 6, CharClass::Numeric),
    FieldSpec::fixed("expiration_date_check_digit", 1, CharClass::Numeric),
    FieldSpec::fixed("personal_number", 14, CharClass::AlphanumericFiller),
    FieldSpec::fixed("personal_number_check_digit", 1, CharClass::Numeric),
    FieldSpec::fixed("check_digit", 1, CharClass::Numeric),
];

/// Field after which the name separator sits.
const SEPARATOR_AFTER: &str = "surname";

/// Pattern matching a whole zone from the first character of the input.
pub fn td3_pattern() -> String {
    let mut fields = String::new();
    for spec in TD3_FIELDS.iter() {
        fields.push_str(&spec.pattern());
        if spec.name == SEPARATOR_AFTER {
            fields.push_str(&format!("(?P<{}>{})", SEPARATOR_FIELD, NAME_SEPARATOR));
        }
    }
    format!("^(?P<{}>{})", ZONE_FIELD, fields)
}

/// Letter, filler, filler, letter, with any whitespace (line breaks included) in between.
pub fn separator_anchor_pattern() -> String {
    format!(r"{a}\s*<\s*<\s*{a}", a = ALPHA)
}

lazy_static! {
    // Counted repetitions of Unicode classes compile large; lift the default size limit.
    pub static ref TD3_REGEX: Regex = RegexBuilder::new(&td3_pattern())
        .size_limit(1 << 27)
        .dfa_size_limit(1 << 26)
        .build()
        .expect("TD3 field table yields a valid pattern");

    pub static ref SEPARATOR_ANCHOR_REGEX: Regex = Regex::new(&separator_anchor_pattern())
        .expect("separator anchor pattern is valid");
}
