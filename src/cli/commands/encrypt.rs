//! `vaultguard encrypt` — encrypt a file into `<FILE>.vault`.

use std::fs;
use std::path::Path;

use dialoguer::Confirm;

use crate::analysis::{StrengthEstimator, Zxcvbn};
use crate::cli::output;
use crate::cli::prompt_new_password;
use crate::config::Settings;
use crate::errors::{Result, VaultGuardError};
use crate::logging::LogHandle;
use crate::vault::{vault_path_for, VaultSession};

/// Execute the `encrypt` command.
pub fn execute(settings: &Settings, log: &LogHandle, file: &str, remove_source: bool) -> Result<()> {
    let path = Path::new(file);

    // 1. Check input and output before asking for anything.
    if !path.is_file() {
        return Err(VaultGuardError::NotFound(path.to_path_buf()));
    }
    let vault_path = vault_path_for(path);
    if vault_path.exists() {
        return Err(VaultGuardError::AlreadyExists(vault_path));
    }

    // 2. Choose a password and check its strength.
    let (password, from_env) = prompt_new_password(settings.min_password_len)?;
    confirm_strength(settings, &password, from_env)?;

    // 3. Encrypt.
    let session = VaultSession::new(settings.kdf_iterations, log)?;
    let written = session.encrypt_file(path, password.as_bytes())?;
    output::success(&format!(
        "Encrypted {} -> {}",
        path.display(),
        written.display()
    ));

    // 4. Optionally remove the plaintext.
    if remove_source {
        fs::remove_file(path)?;
        tracing::info!(file = %path.display(), "removed plaintext source");
        output::info(&format!("Removed {}", path.display()));
    }

    output::tip("Keep your password safe — there is no way to recover the file without it.");
    Ok(())
}

/// Warn about a weak password and, when interactive, ask to continue.
fn confirm_strength(settings: &Settings, password: &str, from_env: bool) -> Result<()> {
    let report = Zxcvbn.estimate(password)?;
    tracing::info!(score = report.score, "checked password strength");

    if report.is_acceptable(settings.min_password_score) {
        return Ok(());
    }

    output::warning(&format!(
        "Weak password: strength {}/4 — {} (crack time {})",
        report.score, report.feedback, report.crack_time
    ));

    if from_env {
        return Ok(());
    }

    let proceed = Confirm::new()
        .with_prompt("Use this password anyway?")
        .default(false)
        .interact()
        .map_err(|e| VaultGuardError::CommandFailed(format!("failed to read confirmation: {e}")))?;

    if proceed {
        Ok(())
    } else {
        Err(VaultGuardError::UserCancelled)
    }
}
