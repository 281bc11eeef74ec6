// OCR noise correction for machine readable zone text

use crate::models::FILLER;

/// Substitutions applied to raw OCR text, in this order.
///
/// Every letter O becomes the digit 0 so numeric fields survive; alphabetic
/// fields get their O back in [`restore_alpha`] once the zone is decoded.
pub const CHAR_FIXES: [(char, Option<char>); 4] = [
    ('\u{3001}', None),        // ideographic comma
    (' ', None),
    ('\u{304f}', Some(FILLER)), // hiragana "ku", read in place of <
    ('O', Some('0')),
];

/// Apply [`CHAR_FIXES`] to OCR output. Line breaks are kept.
pub fn normalize_ocr_text(text: &str) -> String {
    let mut normalized = text.to_string();
    for (from, to) in CHAR_FIXES.iter() {
        normalized = match to {
            Some(to) => normalized.replace(*from, &to.to_string()),
            None => normalized.replace(*from, ""),
        };
    }
    normalized
}

/// Undo the O to 0 substitution for a field that can only hold letters.
pub fn restore_alpha(value: &str) -> String {
    value.replace('0', "O")
}
