//! Vault module — encrypted file artifacts.
//!
//! This module provides:
//! - The binary `.vault` artifact codec (`format`)
//! - The filesystem seam used by sessions (`fs`)
//! - High-level `VaultSession` for encrypting and decrypting files (`session`)

pub mod format;
pub mod fs;
pub mod session;

// Re-export the most commonly used items.
pub use format::{decode, encode, VaultArtifact, FORMAT_VERSION, MIN_ARTIFACT_LEN};
pub use fs::{LocalFs, VaultFs};
pub use session::{plaintext_path_for, vault_path_for, VaultSession};
