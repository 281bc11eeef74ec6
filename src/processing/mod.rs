pub mod extractors;
pub mod noise;
pub mod ocr;

pub use extractors::MrzExtractor;
pub use noise::{normalize_ocr_text, restore_alpha};
pub use ocr::{encode_document, load_ocr_response, EncodedDocument, OcrProvider, OcrResponse, RealIdClient, StaticOcr};
