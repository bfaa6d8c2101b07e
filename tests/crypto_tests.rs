//! Integration tests for the VaultGuard crypto module.

use vaultguard::crypto::{
    decrypt, derive_key, derive_key_default, encrypt, generate_salt, MIN_ITERATIONS,
};
use vaultguard::errors::VaultGuardError;

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let plaintext = b"meeting notes: rotate the backups on friday";

    let sealed = encrypt(&key, plaintext).expect("encrypt should succeed");

    let recovered =
        decrypt(&key, &sealed.nonce, &sealed.ciphertext, &sealed.tag).expect("decrypt should succeed");
    assert_eq!(recovered.as_slice(), plaintext);
}

#[test]
fn empty_plaintext_roundtrip() {
    let key = [0x01u8; 32];

    let sealed = encrypt(&key, b"").expect("encrypt");
    assert!(sealed.ciphertext.is_empty());

    let recovered = decrypt(&key, &sealed.nonce, &sealed.ciphertext, &sealed.tag).expect("decrypt");
    assert!(recovered.is_empty());
}

#[test]
fn encrypt_uses_fresh_nonce_each_time() {
    let key = [0xCDu8; 32];
    let plaintext = b"same input";

    let a = encrypt(&key, plaintext).expect("encrypt 1");
    let b = encrypt(&key, plaintext).expect("encrypt 2");

    assert_ne!(a.nonce, b.nonce, "nonces must never repeat");
    assert_ne!(a.ciphertext, b.ciphertext);
}

#[test]
fn decrypt_with_wrong_key_is_integrity_error() {
    let key = [0x11u8; 32];
    let wrong_key = [0x22u8; 32];

    let sealed = encrypt(&key, b"TOP_SECRET=42").expect("encrypt");
    let result = decrypt(&wrong_key, &sealed.nonce, &sealed.ciphertext, &sealed.tag);

    assert!(matches!(result, Err(VaultGuardError::IntegrityError)));
}

#[test]
fn decrypt_with_corrupted_ciphertext_fails() {
    let key = [0xBBu8; 32];
    let sealed = encrypt(&key, b"0123456789abcdef").expect("encrypt");

    for bit in 0..sealed.ciphertext.len() * 8 {
        let mut ciphertext = sealed.ciphertext.clone();
        ciphertext[bit / 8] ^= 1 << (bit % 8);

        let result = decrypt(&key, &sealed.nonce, &ciphertext, &sealed.tag);
        assert!(
            matches!(result, Err(VaultGuardError::IntegrityError)),
            "ciphertext bit {bit} flip was not detected"
        );
    }
}

#[test]
fn decrypt_with_truncated_ciphertext_fails() {
    let key = [0xAAu8; 32];
    let sealed = encrypt(&key, b"some bytes").expect("encrypt");

    let result = decrypt(
        &key,
        &sealed.nonce,
        &sealed.ciphertext[..sealed.ciphertext.len() - 1],
        &sealed.tag,
    );
    assert!(matches!(result, Err(VaultGuardError::IntegrityError)));
}

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2-HMAC-SHA256)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let salt = generate_salt().expect("salt");

    let key1 = derive_key(b"my-secure-passphrase", &salt, MIN_ITERATIONS).expect("derive 1");
    let key2 = derive_key(b"my-secure-passphrase", &salt, MIN_ITERATIONS).expect("derive 2");

    assert_eq!(key1.as_bytes(), key2.as_bytes());
    assert_eq!(key1.as_bytes().len(), 32);
}

#[test]
fn derive_key_different_salts_different_keys() {
    let salt1 = generate_salt().expect("salt 1");
    let salt2 = generate_salt().expect("salt 2");

    let key1 = derive_key(b"same-password", &salt1, MIN_ITERATIONS).expect("derive 1");
    let key2 = derive_key(b"same-password", &salt2, MIN_ITERATIONS).expect("derive 2");

    assert_ne!(key1, key2, "different salts must produce different keys");
}

#[test]
fn derive_key_different_passwords_different_keys() {
    let salt = generate_salt().expect("salt");

    let key1 = derive_key(b"password-one", &salt, MIN_ITERATIONS).expect("derive 1");
    let key2 = derive_key(b"password-two", &salt, MIN_ITERATIONS).expect("derive 2");

    assert_ne!(key1, key2, "different passwords must produce different keys");
}

#[test]
fn derive_key_default_matches_explicit_480k() {
    let salt = [0x5Au8; 16];

    let default = derive_key_default(b"CorrectHorse1", &salt).expect("default");
    let explicit = derive_key(b"CorrectHorse1", &salt, 480_000).expect("explicit");

    assert_eq!(default, explicit);
}

#[test]
fn derive_key_input_contract() {
    let salt = [0u8; 16];

    assert!(matches!(
        derive_key(b"", &salt, MIN_ITERATIONS),
        Err(VaultGuardError::EmptyPassword)
    ));
    assert!(matches!(
        derive_key(b"pw", &salt[..8], MIN_ITERATIONS),
        Err(VaultGuardError::InvalidSaltLength {
            expected: 16,
            actual: 8
        })
    ));
}

// ---------------------------------------------------------------------------
// End-to-end: password -> key -> encrypt/decrypt
// ---------------------------------------------------------------------------

#[test]
fn full_crypto_pipeline() {
    let salt = generate_salt().expect("salt");

    let key = derive_key(b"hunter2-but-longer", &salt, MIN_ITERATIONS).expect("derive");
    let sealed = encrypt(key.as_bytes(), b"secret-notes").expect("encrypt");

    // Re-derive as a decrypting process would.
    let key_again = derive_key(b"hunter2-but-longer", &salt, MIN_ITERATIONS).expect("derive again");
    let recovered =
        decrypt(key_again.as_bytes(), &sealed.nonce, &sealed.ciphertext, &sealed.tag).expect("decrypt");
    assert_eq!(recovered.as_slice(), b"secret-notes");
}
