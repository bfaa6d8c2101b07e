use std::path::PathBuf;
use thiserror::Error;

/// Reasons a vault artifact could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("artifact is truncated: need at least {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("unsupported vault format version {0}")]
    UnsupportedVersion(u8),

    #[error("ciphertext length field says {declared} bytes but {actual} bytes follow")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("ciphertext of {0} bytes does not fit the length field")]
    CiphertextTooLarge(usize),
}

/// All errors that can occur in VaultGuard.
#[derive(Debug, Error)]
pub enum VaultGuardError {
    // --- Key derivation ---
    #[error("Salt must be exactly {expected} bytes, got {actual}")]
    InvalidSaltLength { expected: usize, actual: usize },

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Iteration count {actual} is below the minimum of {minimum}")]
    IterationsTooLow { minimum: u32, actual: u32 },

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Cipher ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong password or corrupted data")]
    IntegrityError,

    // --- Codec ---
    #[error("Invalid vault file: {0}")]
    Format(#[from] FormatError),

    // --- Filesystem ---
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} already exists — refusing to overwrite")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Config errors ---
    #[error("Config error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl VaultGuardError {
    /// Short, stable label for audit log lines.
    ///
    /// Never includes the error's payload, so it is safe to log
    /// regardless of what the payload contains.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSaltLength { .. } => "invalid_salt_length",
            Self::EmptyPassword => "empty_password",
            Self::IterationsTooLow { .. } => "iterations_too_low",
            Self::KeyDerivationFailed(_) => "key_derivation_failed",
            Self::EncryptionFailed(_) => "encryption_failed",
            Self::IntegrityError => "integrity_error",
            Self::Format(FormatError::Truncated { .. }) => "format_truncated",
            Self::Format(FormatError::UnsupportedVersion(_)) => "format_unsupported_version",
            Self::Format(FormatError::LengthMismatch { .. }) => "format_length_mismatch",
            Self::Format(FormatError::CiphertextTooLarge(_)) => "format_too_large",
            Self::NotFound(_) => "not_found",
            Self::WriteError { .. } => "write_error",
            Self::AlreadyExists(_) => "already_exists",
            Self::Io(_) => "io",
            Self::ConfigError(_) => "config_error",
            Self::CommandFailed(_) => "command_failed",
            Self::UserCancelled => "user_cancelled",
        }
    }
}

/// Convenience type alias for VaultGuard results.
pub type Result<T> = std::result::Result<T, VaultGuardError>;
