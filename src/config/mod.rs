//! Configuration loaded from `.vaultguard.toml`.

pub mod settings;

pub use settings::Settings;
