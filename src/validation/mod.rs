pub mod claims;
pub mod mrz;

pub use claims::{format_birth_date, to_upper_ascii, ClaimVerifier};
pub use mrz::MrzParser;
