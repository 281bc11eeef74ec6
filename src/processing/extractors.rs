// Locating the machine readable zone inside noisy OCR text
use log::debug;

use crate::models::rules::{SEPARATOR_ANCHOR_REGEX, TD3_REGEX, ZONE_FIELD};
use crate::processing::noise::normalize_ocr_text;

/// MrzExtractor recovers a flattened TD3 zone from OCR text blocks.
///
/// The surname/given-name separator is the most reliable landmark in the zone,
/// so every place it occurs is tried as an anchor. Each anchor yields a
/// candidate starting at the line break before it, and the longest candidate
/// that matches the TD3 layout from its first character wins.
pub struct MrzExtractor;

impl MrzExtractor {
    /// Full extraction: join blocks, normalise, anchor, assemble, match, select.
    pub fn extract_mrz<S: AsRef<str>>(ocr_texts: &[S]) -> Option<String> {
        let joined = ocr_texts
            .iter()
            .map(|text| text.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        let text = normalize_ocr_text(&joined);

        let anchors = Self::find_anchors(&text);
        debug!("Found {} separator anchor(s)", anchors.len());

        let matches: Vec<String> = anchors
            .into_iter()
            .filter_map(|anchor| {
                let candidate = Self::assemble_candidate(&text, anchor);
                let matched = Self::match_record(&candidate).map(str::to_string);
                match &matched {
                    Some(zone) => debug!("Anchor at {} matched {} chars", anchor, zone.chars().count()),
                    None => debug!("Anchor at {} produced no match", anchor),
                }
                matched
            })
            .collect();

        Self::select_longest(matches)
    }

    /// Byte offsets of every separator anchor in normalised text, in order.
    pub fn find_anchors(text: &str) -> Vec<usize> {
        SEPARATOR_ANCHOR_REGEX
            .find_iter(text)
            .map(|found| found.start())
            .collect()
    }

    /// Flatten everything from the last line break before `anchor` to the end.
    ///
    /// `anchor` is a byte offset as returned by [`MrzExtractor::find_anchors`].
    ///
    /// # Panics
    ///
    /// Panics if `anchor` is past the end of `text` or not on a character boundary.
    pub fn assemble_candidate(text: &str, anchor: usize) -> String {
        let line_start = text[..anchor].rfind('\n').unwrap_or(0);
        text[line_start..].replace('\n', "")
    }

    /// The zone matched from the first character of `candidate`, if any.
    pub fn match_record(candidate: &str) -> Option<&str> {
        TD3_REGEX
            .captures(candidate)
            .and_then(|captures| captures.name(ZONE_FIELD))
            .map(|zone| zone.as_str())
    }

    /// Longest match by character count; the earliest one wins a tie.
    pub fn select_longest(matches: Vec<String>) -> Option<String> {
        let mut best: Option<(usize, String)> = None;
        for candidate in matches {
            let length = candidate.chars().count();
            let longer = match &best {
                Some((best_length, _)) => length > *best_length,
                None => true,
            };
            if longer {
                best = Some((length, candidate));
            }
        }
        best.map(|(_, zone)| zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASANAVICIENE: &str =
        "P<LTUBASANAVICIENE<<BIRUTE<<<<<<<<<<<<<<<<<<00000000<0LTU5911239F160828545911231023<<<10";

    #[test]
    fn test_find_anchors() {
        let text = "SPECIMEN\nP<LTUBASANAVICIENE<<BIRUTE<<<<\n";
        assert_eq!(MrzExtractor::find_anchors(text), vec![26]);

        let spread = "ABC\nE\n<\n <\nB";
        assert_eq!(MrzExtractor::find_anchors(spread), vec![4]);

        assert!(MrzExtractor::find_anchors("P<LTU\n3<<<10\nA<<<<").is_empty());
    }

    #[test]
    fn test_assemble_candidate_from_line_start() {
        let text = "PECIMEN\nP<LTUA<<B\n123\n";
        let anchor = MrzExtractor::find_anchors(text)[0];
        assert_eq!(MrzExtractor::assemble_candidate(text, anchor), "P<LTUA<<B123");
    }

    #[test]
    fn test_assemble_candidate_without_line_break() {
        let text = "P<LTUA<<B\n123";
        assert_eq!(MrzExtractor::assemble_candidate(text, 4), "P<LTUA<<B123");
    }

    #[test]
    fn test_assemble_candidate_after_multibyte_text() {
        let text = "VARDENĖ Ž\nP<LTUA<<B\n123";
        let anchor = MrzExtractor::find_anchors(text)[0];
        assert!(text.is_char_boundary(anchor));
        assert_eq!(MrzExtractor::assemble_candidate(text, anchor), "P<LTUA<<B123");
    }

    #[test]
    #[should_panic]
    fn test_assemble_candidate_rejects_offset_past_end() {
        MrzExtractor::assemble_candidate("P<LTUA<<B", 42);
    }

    #[test]
    fn test_match_requires_offset_zero() {
        assert_eq!(MrzExtractor::match_record(BASANAVICIENE), Some(BASANAVICIENE));

        let shifted = format!("2016{}", BASANAVICIENE);
        assert_eq!(MrzExtractor::match_record(&shifted), None);
    }

    #[test]
    fn test_match_ignores_trailing_text() {
        let trailing = format!("{}LIETUV0S", BASANAVICIENE);
        assert_eq!(MrzExtractor::match_record(&trailing), Some(BASANAVICIENE));
    }

    #[test]
    fn test_select_longest_prefers_earliest_on_tie() {
        let matches = vec!["AAAA".to_string(), "BBBBBB".to_string(), "CCCCCC".to_string()];
        assert_eq!(MrzExtractor::select_longest(matches), Some("BBBBBB".to_string()));
        assert_eq!(MrzExtractor::select_longest(Vec::new()), None);
    }

    #[test]
    fn test_select_longest_counts_characters() {
        let matches = vec!["ŽŽŽ".to_string(), "ABCD".to_string()];
        assert_eq!(MrzExtractor::select_longest(matches), Some("ABCD".to_string()));
    }

    #[test]
    fn test_extract_from_noisy_block() {
        let blocks = [
            "2016",
            "PECIMEN\nP<LTUBASANAVICIENE<<BIRUTE<<<<<<<<<<<<<<<<<<\n00000000<OLTU5911239F160828545911231023<<<10\n",
        ];
        assert_eq!(MrzExtractor::extract_mrz(&blocks), Some(BASANAVICIENE.to_string()));
    }

    #[test]
    fn test_extract_nothing_from_plain_text() {
        let blocks = ["LIETUVOS RESPUBLIKA\nPASAS\n"];
        assert_eq!(MrzExtractor::extract_mrz(&blocks), None);
        let empty: [&str; 0] = [];
        assert_eq!(MrzExtractor::extract_mrz(&empty), None);
    }
}
