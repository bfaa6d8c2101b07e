//! `vaultguard decrypt` — recover the plaintext of a `.vault` file.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::prompt_password;
use crate::config::Settings;
use crate::errors::{Result, VaultGuardError};
use crate::logging::LogHandle;
use crate::vault::{plaintext_path_for, VaultSession};

/// Execute the `decrypt` command.
pub fn execute(
    settings: &Settings,
    log: &LogHandle,
    file: &str,
    output_path: Option<&str>,
    to_stdout: bool,
) -> Result<()> {
    let path = Path::new(file);
    if !path.is_file() {
        return Err(VaultGuardError::NotFound(path.to_path_buf()));
    }

    // Resolve the output before prompting so a bad name fails fast.
    let target = if to_stdout {
        None
    } else {
        let target = match output_path {
            Some(o) => PathBuf::from(o),
            None => plaintext_path_for(path).ok_or_else(|| {
                VaultGuardError::CommandFailed(format!(
                    "cannot infer an output name for {} — pass --output or --stdout",
                    path.display()
                ))
            })?,
        };
        if target.exists() {
            return Err(VaultGuardError::AlreadyExists(target));
        }
        Some(target)
    };

    let password = prompt_password()?;
    let session = VaultSession::new(settings.kdf_iterations, log)?;

    match target {
        Some(target) => {
            session.decrypt_file_to(path, &target, password.as_bytes())?;
            output::success(&format!(
                "Decrypted {} -> {}",
                path.display(),
                target.display()
            ));
        }
        None => {
            let plaintext = session.decrypt_file(path, password.as_bytes())?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&plaintext)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
