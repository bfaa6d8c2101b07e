//! AES-256-GCM authenticated encryption in detached form.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce from the
//! OS random source and returns nonce, ciphertext and 16-byte tag as
//! separate fields so the vault codec can lay them out on disk.
//!
//! The expanded AES key schedule is wiped when the cipher is dropped
//! (the `zeroize` feature of `aes` and `aes-gcm`).
//!
//! `decrypt` fails closed: the working buffer is wiped before an
//! `IntegrityError` is returned, so no unauthenticated plaintext ever
//! reaches the caller.

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadCore, AeadInPlace, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key};
use zeroize::Zeroizing;

use super::kdf::KEY_LEN;
use crate::errors::{Result, VaultGuardError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Output of a single encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
}

/// Encrypt `plaintext` with a 32-byte `key`.
pub fn encrypt(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<Sealed> {
    encrypt_with_aad(key, plaintext, &[])
}

/// Encrypt `plaintext` and bind `aad` into the authentication tag.
///
/// `aad` is not encrypted and not returned; the same bytes must be
/// supplied to `decrypt_with_aad`.
pub fn encrypt_with_aad(key: &[u8; KEY_LEN], plaintext: &[u8], aad: &[u8]) -> Result<Sealed> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    // Never derived from caller input.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // Wiped on drop if encryption bails out with plaintext still inside.
    let mut buffer = Zeroizing::new(plaintext.to_vec());
    let tag = cipher
        .encrypt_in_place_detached(&nonce, aad, &mut buffer)
        .map_err(|e| VaultGuardError::EncryptionFailed(format!("encryption error: {e}")))?;

    Ok(Sealed {
        nonce: nonce.into(),
        ciphertext: std::mem::take(&mut *buffer),
        tag: tag.into(),
    })
}

/// Decrypt data that was produced by `encrypt`.
pub fn decrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Zeroizing<Vec<u8>>> {
    decrypt_with_aad(key, nonce, ciphertext, tag, &[])
}

/// Decrypt data that was produced by `encrypt_with_aad` with the same `aad`.
///
/// Tag comparison is constant-time (done inside `aes-gcm`).
pub fn decrypt_with_aad(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
    aad: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    let mut buffer = Zeroizing::new(ciphertext.to_vec());
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(nonce),
            aad,
            &mut buffer,
            GenericArray::from_slice(tag),
        )
        .map_err(|_| VaultGuardError::IntegrityError)?;

    Ok(buffer)
}
