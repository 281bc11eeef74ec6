use std::path::PathBuf;

use clap::Parser;
use log::info;
use passcheck::processing::{load_ocr_response, MrzExtractor};
use passcheck::utils::logger::init_logger;
use passcheck::utils::PassportError;
use passcheck::validation::MrzParser;

/// Replay a saved OCR response through MRZ extraction.
#[derive(Parser, Debug)]
#[command(name = "mrz_demo")]
struct Args {
    /// JSON file holding `{"ocr_texts": [...]}`
    ocr_response: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), PassportError> {
    let args = Args::parse();
    init_logger(args.verbose);

    println!("MRZ Extraction Demo");
    println!("-------------------");

    let ocr_texts = load_ocr_response(&args.ocr_response)?;
    info!("Loaded {} OCR block(s) from {:?}", ocr_texts.len(), args.ocr_response);

    let zone = match MrzExtractor::extract_mrz(&ocr_texts) {
        Some(zone) => zone,
        None => {
            println!("\n{}", PassportError::MrzNotFound.user_message());
            return Ok(());
        }
    };
    println!("\nFlattened MRZ:\n  {}", zone);

    let record = MrzParser::parse(&zone)?;
    println!("\nDecoded fields:");
    print!("{}", record);

    Ok(())
}
