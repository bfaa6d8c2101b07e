//! Cryptographic primitives for VaultGuard.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - AES-256-GCM authenticated encryption with detached tags (`cipher`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use cipher::{decrypt, decrypt_with_aad, encrypt, encrypt_with_aad, Sealed, NONCE_LEN, TAG_LEN};
pub use kdf::{
    derive_key, derive_key_default, generate_salt, DerivedKey, DEFAULT_ITERATIONS, KEY_LEN,
    MIN_ITERATIONS, SALT_LEN,
};
