use passcheck::models::{CharClass, TD3_FIELDS};
use passcheck::processing::{normalize_ocr_text, MrzExtractor};
use passcheck::validation::MrzParser;

const BASANAVICIENE_MRZ: &str =
    "P<LTUBASANAVICIENE<<BIRUTE<<<<<<<<<<<<<<<<<<00000000<0LTU5911239F160828545911231023<<<10";

const BASANAVICIENE_OCR: &str =
    "PECIMEN\nP<LTUBASANAVICIENE<<BIRUTE<<<<<<<<<<<<<<<<<<\n00000000<OLTU5911239F160828545911231023<<<10\n";

const BRUZAITE_SHORT_OCR: &str =
    "Bouzoute\nEL\nP<LTUBRUZAITE<<VIGILIJA<<<<\n<<<<<\n00000000<OLTU7803118 F210127747803111025<<<64\n";

const TWO_NAMES_LINE_1: &str = "P<LTUBASANAVICIENE<<BIRUTE<ONA<<<<<<<<<<<<<<";
const TWO_NAMES_LINE_2: &str = "00000000<OLTU5911239F160828545911231023<<<10";

const ERIKSSON_LINE_1: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
const ERIKSSON_LINE_2: &str = "L898902C36UTO7408122F1204159<<<<<<<<<<<<<<<4";

fn one_char_per_line(text: &str) -> String {
    text.chars().map(|c| format!("{}\n", c)).collect()
}

#[test]
fn test_extract_from_noisy_multiline_block() {
    let blocks = [BASANAVICIENE_OCR];
    assert_eq!(
        MrzExtractor::extract_mrz(&blocks),
        Some(BASANAVICIENE_MRZ.to_string())
    );
}

#[test]
fn test_extract_with_leading_unrelated_block() {
    let blocks = ["2016", BASANAVICIENE_OCR];
    assert_eq!(
        MrzExtractor::extract_mrz(&blocks),
        Some(BASANAVICIENE_MRZ.to_string())
    );
}

#[test]
fn test_decode_round_trip() {
    let record = MrzParser::parse(BASANAVICIENE_MRZ).unwrap();
    assert_eq!(record.issuing_country, "LTU");
    assert_eq!(record.surname, "BASANAVICIENE");
    assert_eq!(record.names, "BIRUTE");
    assert_eq!(record.passport_number, "00000000");
    assert_eq!(record.nationality, "LTU");
    assert_eq!(record.date_of_birth, "591123");
    assert_eq!(record.sex, "F");
    assert_eq!(record.expiration_date, "160828");
    assert_eq!(record.personal_number, "45911231023");
    assert_eq!(record.check_digit, "0");
}

#[test]
fn test_noise_tolerant_extraction() {
    let noisy = "Brunaite\n*\nP<LTUBRUZAITE<<VIGILIJA<<<<\n\u{304f}\u{304f}\u{304f}\u{304f}\u{304f}\u{304f}\u{304f}\u{304f}\u{304f}\u{304f}\u{3001}\n00000000<OLTU7803118 F210127747803111025<<<64\nLIETUVOS\n";
    let clean = "Brunaite\n*\nP<LTUBRUZAITE<<VIGILIJA<<<<\n<<<<<<<<<<\n00000000<OLTU7803118F210127747803111025<<<64\nLIETUVOS\n";

    let expected =
        "P<LTUBRUZAITE<<VIGILIJA<<<<<<<<<<<<<<00000000<0LTU7803118F210127747803111025<<<64";
    assert_eq!(MrzExtractor::extract_mrz(&[noisy]), Some(expected.to_string()));
    assert_eq!(MrzExtractor::extract_mrz(&[clean]), Some(expected.to_string()));
}

#[test]
fn test_dropped_fillers_give_shorter_zone() {
    let zone = MrzExtractor::extract_mrz(&[BRUZAITE_SHORT_OCR]).unwrap();
    assert_eq!(
        zone,
        "P<LTUBRUZAITE<<VIGILIJA<<<<<<<<<00000000<0LTU7803118F210127747803111025<<<64"
    );
    assert_eq!(zone.chars().count(), 76);

    let record = MrzParser::parse(&zone).unwrap();
    assert_eq!(record.names, "VIGILIJA");
    assert_eq!(record.personal_number, "47803111025");
}

#[test]
fn test_longest_match_selected() {
    let short_first = [BRUZAITE_SHORT_OCR, BASANAVICIENE_OCR];
    let long_first = [BASANAVICIENE_OCR, BRUZAITE_SHORT_OCR];

    for blocks in [short_first, long_first].iter() {
        let text = normalize_ocr_text(&blocks.join("\n"));
        assert_eq!(MrzExtractor::find_anchors(&text).len(), 2);

        let record = MrzParser::extract_record(blocks).unwrap();
        assert_eq!(record.surname, "BASANAVICIENE");
    }
}

#[test]
fn test_two_given_names_decode() {
    let blocks = [format!("PECIMEN\n{}\n{}\n", TWO_NAMES_LINE_1, TWO_NAMES_LINE_2)];
    let record = MrzParser::extract_record(&blocks).unwrap();
    assert_eq!(record.surname, "BASANAVICIENE");
    assert_eq!(record.names, "BIRUTE<ONA");
}

#[test]
fn test_over_fragmented_input_not_found() {
    let fragmented = format!(
        "PECIMEN\n{}{}LETAVAS\n",
        one_char_per_line(TWO_NAMES_LINE_1),
        one_char_per_line(TWO_NAMES_LINE_2)
    );
    assert!(fragmented.starts_with("PECIMEN\nP\n<\nL\nT\nU\n"));
    assert_eq!(MrzExtractor::extract_mrz(&[fragmented]), None);
}

#[test]
fn test_decoded_fields_respect_classes() {
    let inputs = vec![
        vec![BASANAVICIENE_OCR.to_string()],
        vec![BRUZAITE_SHORT_OCR.to_string()],
        vec![format!("{}\n{}", TWO_NAMES_LINE_1, TWO_NAMES_LINE_2)],
    ];

    for blocks in inputs.iter() {
        let record = MrzParser::extract_record(blocks).unwrap();
        for spec in TD3_FIELDS.iter() {
            let value = record.get(spec.name).unwrap();
            if spec.class.is_alphabetic() {
                assert!(!value.contains('0'), "{} = {:?}", spec.name, value);
            }
            if spec.class == CharClass::Numeric {
                assert!(
                    value.chars().all(|c| c.is_ascii_digit()),
                    "{} = {:?}",
                    spec.name,
                    value
                );
            }
        }
    }
}

#[test]
fn test_blank_personal_number_with_filler_check_digit() {
    let blocks = [format!("SPECIMEN\n{}\n{}\n", ERIKSSON_LINE_1, ERIKSSON_LINE_2)];
    let zone = MrzExtractor::extract_mrz(&blocks).unwrap();
    assert_eq!(zone.chars().count(), 88);

    let record = MrzParser::extract_record(&blocks).unwrap();
    assert_eq!(record.issuing_country, "UTO");
    assert_eq!(record.surname, "ERIKSSON");
    assert_eq!(record.names, "ANNA<MARIA");
    assert_eq!(record.passport_number, "L898902C3");
    assert_eq!(record.date_of_birth, "740812");
    assert_eq!(record.expiration_date, "120415");
    assert_eq!(record.personal_number, "");
    assert_eq!(record.personal_number_check_digit, "");
    assert_eq!(record.check_digit, "4");
}

#[test]
fn test_text_before_zone_on_same_line_skipped() {
    let prefixed = format!("LIETUVA\n2016{}\n{}\n", TWO_NAMES_LINE_1, TWO_NAMES_LINE_2);
    assert_eq!(MrzExtractor::extract_mrz(&[prefixed.as_str()]), None);

    let blocks = [
        prefixed,
        format!("PASAS\n{}\n{}\n", ERIKSSON_LINE_1, ERIKSSON_LINE_2),
    ];
    let text = normalize_ocr_text(&blocks.join("\n"));
    assert_eq!(MrzExtractor::find_anchors(&text).len(), 2);

    let record = MrzParser::extract_record(&blocks).unwrap();
    assert_eq!(record.surname, "ERIKSSON");
}
