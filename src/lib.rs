pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod passport_validator;

pub use models::{ClaimField, IdentityClaim, MrzRecord, VerificationResult};
pub use passport_validator::PassportValidator;
pub use utils::{PassportError, Result};
