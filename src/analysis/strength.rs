//! Password strength scoring.
//!
//! Scoring itself is delegated to `zxcvbn`; this module only narrows its
//! result down to what VaultGuard shows and checks against.

use std::fmt;

use crate::errors::{Result, VaultGuardError};

/// Feedback shown when the estimator has no warning to give.
pub const NO_WEAKNESSES: &str = "No major weaknesses";

/// What the estimator says about one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// 0 (trivially guessable) to 4 (very unguessable).
    pub score: u8,
    /// The estimator's main warning, or `NO_WEAKNESSES`.
    pub feedback: String,
    /// Suggestions for a stronger password, possibly empty.
    pub suggestions: Vec<String>,
    /// Estimated time to guess at 10 guesses per second, unthrottled.
    pub crack_time: String,
}

impl StrengthReport {
    /// `true` if the score meets `min_score`.
    pub fn is_acceptable(&self, min_score: u8) -> bool {
        self.score >= min_score
    }
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/4 ({}; crack time {})",
            self.score, self.feedback, self.crack_time
        )
    }
}

/// Anything that can score a password.
pub trait StrengthEstimator {
    fn estimate(&self, password: &str) -> Result<StrengthReport>;
}

/// The `zxcvbn` estimator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zxcvbn;

impl StrengthEstimator for Zxcvbn {
    fn estimate(&self, password: &str) -> Result<StrengthReport> {
        let entropy =
            zxcvbn::zxcvbn(password, &[]).map_err(|_| VaultGuardError::EmptyPassword)?;

        let (feedback, suggestions) = match entropy.feedback() {
            Some(fb) => (
                fb.warning()
                    .map_or_else(|| NO_WEAKNESSES.to_string(), |w| w.to_string()),
                fb.suggestions().iter().map(ToString::to_string).collect(),
            ),
            None => (NO_WEAKNESSES.to_string(), Vec::new()),
        };

        Ok(StrengthReport {
            score: entropy.score(),
            feedback,
            suggestions,
            crack_time: entropy
                .crack_times()
                .online_no_throttling_10_per_second()
                .to_string(),
        })
    }
}

/// Score `password` with the default estimator.
pub fn analyze(password: &str) -> Result<StrengthReport> {
    Zxcvbn.estimate(password)
}
