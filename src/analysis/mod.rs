//! Password analysis tools that sit beside the vault.
//!
//! - Strength scoring through an external estimator (`strength`)
//! - Keyword/year wordlists for offline cracking tests (`wordlist`)

pub mod strength;
pub mod wordlist;

pub use strength::{analyze, StrengthEstimator, StrengthReport, Zxcvbn};
