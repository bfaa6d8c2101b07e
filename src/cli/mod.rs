//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use zeroize::Zeroizing;

use crate::errors::{Result, VaultGuardError};

/// Environment variable consulted before prompting for a password.
pub const PASSWORD_ENV: &str = "VAULTGUARD_PASSWORD";

/// VaultGuard CLI: password-based file encryption.
#[derive(Parser)]
#[command(
    name = "vaultguard",
    about = "Password-based file encryption vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a file into <FILE>.vault
    Encrypt {
        /// File to encrypt
        file: String,

        /// Delete the plaintext file after a successful encryption
        #[arg(long)]
        remove_source: bool,
    },

    /// Decrypt a .vault file
    Decrypt {
        /// Vault file to decrypt
        file: String,

        /// Where to write the plaintext (default: FILE without .vault)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<String>,

        /// Print the plaintext to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Estimate password strength
    Analyze {
        /// Password to analyze (omit for interactive prompt)
        password: Option<String>,
    },

    /// Generate a wordlist for offline password testing
    Wordlist {
        /// Comma-separated keywords (e.g. john,dog,admin)
        #[arg(short, long)]
        keywords: String,

        /// Comma-separated years (e.g. 2020,2025)
        #[arg(short, long)]
        years: String,

        /// Output file (default: wordlist_<timestamp>.txt)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// Subcommand name, for the audit log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Encrypt { .. } => "encrypt",
            Self::Decrypt { .. } => "decrypt",
            Self::Analyze { .. } => "analyze",
            Self::Wordlist { .. } => "wordlist",
            Self::Completions { .. } => "completions",
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Password supplied through `VAULTGUARD_PASSWORD`, if set and non-empty.
fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Get the password for an existing vault, trying in order:
/// 1. `VAULTGUARD_PASSWORD` env var (CI/scripts)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter vault password")
        .interact()
        .map_err(|e| VaultGuardError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new encryption password with confirmation.
///
/// Also respects `VAULTGUARD_PASSWORD` for scripted usage.
/// Enforces `min_len`.
///
/// The returned flag is `true` when the password came from the
/// environment, i.e. nobody is there to answer follow-up prompts.
pub fn prompt_new_password(min_len: usize) -> Result<(Zeroizing<String>, bool)> {
    if let Some(pw) = password_from_env() {
        if pw.chars().count() < min_len {
            return Err(VaultGuardError::CommandFailed(format!(
                "password must be at least {min_len} characters"
            )));
        }
        return Ok((pw, true));
    }

    loop {
        let password = Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Choose encryption password")
                .with_confirmation(
                    "Confirm encryption password",
                    "Passwords do not match, try again",
                )
                .interact()
                .map_err(|e| VaultGuardError::CommandFailed(format!("password prompt: {e}")))?,
        );

        if password.chars().count() < min_len {
            output::warning(&format!(
                "Password must be at least {min_len} characters. Try again."
            ));
            continue;
        }

        return Ok((password, false));
    }
}

/// Split a comma-separated argument into trimmed, non-empty items.
pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
