// Passport identity check: OCR the document, recover its MRZ, compare the entered identity

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use passcheck::{
    models::{IdentityClaim, MrzRecord},
    processing::RealIdClient,
    utils::{logger::init_logger, OcrConfig},
    PassportValidator, Result,
};

#[derive(Parser, Debug)]
#[command(name = "passcheck", version, about = "Check an identity claim against a passport image")]
struct Cli {
    /// Passport image to submit for OCR
    image: PathBuf,

    /// Given name(s) as entered by the user
    #[arg(long)]
    name: String,

    /// Surname as entered by the user
    #[arg(long)]
    surname: String,

    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    birth_date: String,

    /// Override the OCR endpoint from REALID_API_URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Print the decoded record as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn print_record(record: &MrzRecord) {
    println!("\n===============================================");
    println!("      MACHINE READABLE ZONE");
    println!("===============================================\n");
    print!("{}", record);
}

fn run(cli: &Cli) -> Result<MrzRecord> {
    let claim = IdentityClaim::parse(&cli.name, &cli.surname, &cli.birth_date)?;

    let mut config = OcrConfig::from_env()?;
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint.clone());
    }

    let image_data = std::fs::read(&cli.image)?;
    let validator = PassportValidator::new(RealIdClient::new(config)?);
    validator.validate(&image_data, &claim)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(record) => {
            println!("You have entered correct information!");
            if cli.json {
                match serde_json::to_string_pretty(&record) {
                    Ok(json) => println!("{}", json),
                    Err(err) => error!("Failed to serialise record: {}", err),
                }
            } else {
                print_record(&record);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
