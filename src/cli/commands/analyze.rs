//! `vaultguard analyze` — estimate how guessable a password is.

use zeroize::Zeroizing;

use crate::analysis::{StrengthEstimator, Zxcvbn};
use crate::cli::output;
use crate::errors::{Result, VaultGuardError};

/// Execute the `analyze` command.
pub fn execute(password: Option<&str>) -> Result<()> {
    let password = match password {
        Some(pw) => Zeroizing::new(pw.to_string()),
        None => Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Password to analyze")
                .interact()
                .map_err(|e| VaultGuardError::CommandFailed(format!("password prompt: {e}")))?,
        ),
    };

    let report = Zxcvbn.estimate(&password)?;

    // Score only; the password itself never reaches the log.
    tracing::info!(score = report.score, "analyzed password");

    output::print_strength_report(&report);
    Ok(())
}
