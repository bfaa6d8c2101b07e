//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is the only tunable.  It defaults to 480 000,
//! which costs well over 100 ms per derivation on commodity hardware,
//! and may never go below 100 000.

use hmac::Hmac;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Result, VaultGuardError};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Iteration count used when none is configured.
pub const DEFAULT_ITERATIONS: u32 = 480_000;

/// Lowest iteration count accepted by `derive_key`.
pub const MIN_ITERATIONS: u32 = 100_000;

/// A 32-byte derived key that zeroes its memory when dropped.
///
/// Only ever produced by `derive_key`; there is no way to build one
/// from arbitrary bytes outside this module.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

// Constant-time comparison.
impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes[..].ct_eq(&other.bytes[..]).into()
    }
}

impl Eq for DerivedKey {}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive a 32-byte key with the default iteration count.
pub fn derive_key_default(password: &[u8], salt: &[u8]) -> Result<DerivedKey> {
    derive_key(password, salt, DEFAULT_ITERATIONS)
}

/// Derive a 32-byte key from a password and a 16-byte salt.
///
/// The same password + salt + iterations always produce the same key.
pub fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(VaultGuardError::EmptyPassword);
    }
    if salt.len() != SALT_LEN {
        return Err(VaultGuardError::InvalidSaltLength {
            expected: SALT_LEN,
            actual: salt.len(),
        });
    }
    if iterations < MIN_ITERATIONS {
        return Err(VaultGuardError::IterationsTooLow {
            minimum: MIN_ITERATIONS,
            actual: iterations,
        });
    }

    let mut key = DerivedKey {
        bytes: [0u8; KEY_LEN],
    };
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key.bytes)
        .map_err(|e| VaultGuardError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| VaultGuardError::EncryptionFailed(format!("OS random source: {e}")))?;
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: [u8; SALT_LEN] = [7u8; SALT_LEN];

    #[test]
    fn rejects_empty_password() {
        let err = derive_key(b"", &SALT, MIN_ITERATIONS).unwrap_err();
        assert!(matches!(err, VaultGuardError::EmptyPassword));
    }

    #[test]
    fn rejects_short_and_long_salts() {
        for len in [0usize, 15, 17, 32] {
            let salt = vec![0u8; len];
            let err = derive_key(b"pw", &salt, MIN_ITERATIONS).unwrap_err();
            assert!(
                matches!(err, VaultGuardError::InvalidSaltLength { expected: 16, actual } if actual == len),
                "salt of {len} bytes should be rejected"
            );
        }
    }

    #[test]
    fn rejects_weak_iteration_count() {
        let err = derive_key(b"pw", &SALT, MIN_ITERATIONS - 1).unwrap_err();
        assert!(matches!(
            err,
            VaultGuardError::IterationsTooLow {
                minimum: MIN_ITERATIONS,
                actual: 99_999
            }
        ));
    }

    #[test]
    fn iteration_count_changes_the_key() {
        let a = derive_key(b"pw", &SALT, MIN_ITERATIONS).unwrap();
        let b = derive_key(b"pw", &SALT, MIN_ITERATIONS + 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn debug_output_is_redacted() {
        let key = derive_key(b"pw", &SALT, MIN_ITERATIONS).unwrap();
        let shown = format!("{key:?}");
        assert_eq!(shown, "DerivedKey([REDACTED])");
    }

    #[test]
    fn salts_are_random() {
        assert_ne!(generate_salt().unwrap(), generate_salt().unwrap());
    }
}
