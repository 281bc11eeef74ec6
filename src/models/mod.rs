pub mod data;
pub mod rules;

pub use data::{ClaimField, IdentityClaim, MrzRecord, VerificationResult};
pub use rules::{CharClass, FieldSpec, FILLER, TD3_FIELDS};
