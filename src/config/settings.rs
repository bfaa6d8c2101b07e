use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::{DEFAULT_ITERATIONS, MIN_ITERATIONS};
use crate::errors::{Result, VaultGuardError};

/// Highest score the strength estimator reports.
const MAX_SCORE: u8 = 4;

/// Project-level configuration, loaded from `.vaultguard.toml`.
///
/// Every field has a sensible default so VaultGuard works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// PBKDF2 iteration count (default: 480 000, minimum 100 000).
    ///
    /// Not stored in the artifact: decrypt with the count you encrypted with.
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Audit log file, appended to (default: `vaultguard.log`).
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Log filter directive, overridden by `RUST_LOG` (default: `info`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Minimum length for a new encryption password (default: 8).
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,

    /// Estimator score (0-4) below which a new password needs confirmation.
    #[serde(default = "default_min_password_score")]
    pub min_password_score: u8,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_kdf_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_log_file() -> String {
    "vaultguard.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_min_password_len() -> usize {
    8
}

fn default_min_password_score() -> u8 {
    3
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            kdf_iterations: default_kdf_iterations(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            min_password_len: default_min_password_len(),
            min_password_score: default_min_password_score(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".vaultguard.toml";

    /// Load settings from `<project_dir>/.vaultguard.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed or holds unsafe values,
    /// an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultGuardError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would weaken the vault or cannot be honoured.
    pub fn validate(&self) -> Result<()> {
        if self.kdf_iterations < MIN_ITERATIONS {
            return Err(VaultGuardError::ConfigError(format!(
                "kdf_iterations must be at least {MIN_ITERATIONS} (got {})",
                self.kdf_iterations
            )));
        }
        if self.min_password_score > MAX_SCORE {
            return Err(VaultGuardError::ConfigError(format!(
                "min_password_score must be between 0 and {MAX_SCORE} (got {})",
                self.min_password_score
            )));
        }
        if self.log_file.trim().is_empty() {
            return Err(VaultGuardError::ConfigError(
                "log_file cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.kdf_iterations, 480_000);
        assert_eq!(s.log_file, "vaultguard.log");
        assert_eq!(s.log_level, "info");
        assert_eq!(s.min_password_len, 8);
        assert_eq!(s.min_password_score, 3);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.kdf_iterations, DEFAULT_ITERATIONS);
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
kdf_iterations = 600000
log_file = "logs/audit.log"
log_level = "debug"
min_password_len = 12
min_password_score = 4
"#;
        fs::write(tmp.path().join(".vaultguard.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.kdf_iterations, 600_000);
        assert_eq!(settings.log_file, "logs/audit.log");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.min_password_len, 12);
        assert_eq!(settings.min_password_score, 4);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".vaultguard.toml"), "log_level = \"warn\"\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.kdf_iterations, 480_000);
        assert_eq!(settings.log_file, "vaultguard.log");
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".vaultguard.toml"), "not valid {{toml").unwrap();

        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn load_rejects_weak_iteration_count() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".vaultguard.toml"), "kdf_iterations = 1000\n").unwrap();

        let err = Settings::load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("kdf_iterations"));
    }

    #[test]
    fn validate_rejects_out_of_range_score() {
        let s = Settings {
            min_password_score: 5,
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }
}
