pub mod config;
pub mod error;
pub mod logger;

pub use config::OcrConfig;
pub use error::{PassportError, Result};
