//! High-level vault operations used by CLI commands.
//!
//! `VaultSession` wires the key derivation, cipher and codec layers
//! together behind two file operations:
//!
//! - `encrypt_file(path, password)` writes `<path>.vault`
//! - `decrypt_file(path, password)` returns the plaintext
//!
//! Every call generates its own salt and nonce and derives its own key;
//! the key is dropped (and zeroized) as soon as the cipher step is done.
//! Nothing is cached between calls.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::Dispatch;
use zeroize::Zeroizing;

use crate::crypto::{self, MIN_ITERATIONS, SALT_LEN};
use crate::errors::{Result, VaultGuardError};
use crate::logging::LogHandle;

use super::format::{self, VaultArtifact};
use super::fs::{LocalFs, VaultFs};

/// File extension appended to encrypted files.
pub const VAULT_EXTENSION: &str = "vault";

/// Orchestrates encrypt/decrypt over a `VaultFs`.
pub struct VaultSession<F: VaultFs = LocalFs> {
    fs: F,
    iterations: u32,
    log: Dispatch,
}

impl VaultSession<LocalFs> {
    /// Session over the local disk.
    pub fn new(iterations: u32, log: &LogHandle) -> Result<Self> {
        Self::with_fs(LocalFs, iterations, log)
    }
}

impl<F: VaultFs> VaultSession<F> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Session over any `VaultFs`.
    ///
    /// Fails if `iterations` is below the PBKDF2 minimum, so a bad
    /// configuration surfaces before any file is touched.
    pub fn with_fs(fs: F, iterations: u32, log: &LogHandle) -> Result<Self> {
        if iterations < MIN_ITERATIONS {
            return Err(VaultGuardError::IterationsTooLow {
                minimum: MIN_ITERATIONS,
                actual: iterations,
            });
        }
        Ok(Self {
            fs,
            iterations,
            log: log.dispatch().clone(),
        })
    }

    /// PBKDF2 iteration count used by this session.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// The underlying filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    // ------------------------------------------------------------------
    // In-memory operations
    // ------------------------------------------------------------------

    /// Encrypt `plaintext` into an encoded vault artifact.
    pub fn seal(&self, password: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.seal_with_salt(password, plaintext).map(|(blob, _)| blob)
    }

    /// Decode and decrypt a vault artifact.
    ///
    /// Wrong password and tampering both surface as `IntegrityError`;
    /// malformed input as `Format`.
    pub fn open(&self, password: &[u8], blob: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let artifact = format::decode(blob)?;

        let key = crypto::derive_key(password, &artifact.salt, self.iterations)?;
        crypto::decrypt_with_aad(
            key.as_bytes(),
            &artifact.nonce,
            &artifact.ciphertext,
            &artifact.tag,
            &artifact.header(),
        )
    }

    // ------------------------------------------------------------------
    // File operations
    // ------------------------------------------------------------------

    /// Encrypt the file at `path` and write the artifact to `<path>.vault`.
    ///
    /// Returns the path that was written.  Any existing file there is
    /// replaced.
    pub fn encrypt_file(&self, path: &Path, password: &[u8]) -> Result<PathBuf> {
        let output = vault_path_for(path);

        let result = self.scoped(|| -> Result<([u8; SALT_LEN], usize)> {
            let plaintext = Zeroizing::new(self.fs.read_bytes(path)?);
            let (blob, salt) = self.seal_with_salt(password, &plaintext)?;
            self.fs.write_bytes(&output, &blob)?;
            Ok((salt, blob.len()))
        });

        self.scoped(|| match &result {
            Ok((salt, size)) => tracing::info!(
                file = %path.display(),
                output = %output.display(),
                salt = %hex::encode(salt),
                bytes = size,
                "encrypted file"
            ),
            Err(e) => tracing::warn!(
                file = %path.display(),
                error = e.kind(),
                "encryption failed"
            ),
        });

        result.map(|_| output)
    }

    /// Read and decrypt the vault artifact at `path`.
    pub fn decrypt_file(&self, path: &Path, password: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let result = self.scoped(|| -> Result<(Zeroizing<Vec<u8>>, String)> {
            let blob = self.fs.read_bytes(path)?;
            let plaintext = self.open(password, &blob)?;
            Ok((plaintext, salt_of(&blob)))
        });

        self.scoped(|| match &result {
            Ok((plaintext, salt)) => tracing::info!(
                file = %path.display(),
                salt = %salt,
                bytes = plaintext.len(),
                "decrypted file"
            ),
            Err(e) => tracing::warn!(
                file = %path.display(),
                error = e.kind(),
                "decryption failed"
            ),
        });

        result.map(|(plaintext, _)| plaintext)
    }

    /// Decrypt the artifact at `path` and write the plaintext to `output`.
    pub fn decrypt_file_to(&self, path: &Path, output: &Path, password: &[u8]) -> Result<()> {
        let plaintext = self.decrypt_file(path, password)?;
        let result = self.fs.write_bytes(output, &plaintext);

        self.scoped(|| match &result {
            Ok(()) => tracing::info!(
                file = %path.display(),
                output = %output.display(),
                "wrote decrypted file"
            ),
            Err(e) => tracing::warn!(
                file = %path.display(),
                output = %output.display(),
                error = e.kind(),
                "writing decrypted file failed"
            ),
        });

        result
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn seal_with_salt(
        &self,
        password: &[u8],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, [u8; SALT_LEN])> {
        let salt = crypto::generate_salt()?;
        let header = format::header_bytes(&salt);

        let sealed = {
            let key = crypto::derive_key(password, &salt, self.iterations)?;
            crypto::encrypt_with_aad(key.as_bytes(), plaintext, &header)?
        };

        let artifact = VaultArtifact {
            salt,
            nonce: sealed.nonce,
            ciphertext: sealed.ciphertext,
            tag: sealed.tag,
        };
        Ok((format::encode(&artifact)?, salt))
    }

    /// Run `f` with this session's logger as the default.
    fn scoped<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.log, f)
    }
}

/// `notes.txt` -> `notes.txt.vault`.
pub fn vault_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(VAULT_EXTENSION);
    PathBuf::from(name)
}

/// `notes.txt.vault` -> `notes.txt`; `None` if there is no `.vault` suffix
/// or nothing would be left of the name.
pub fn plaintext_path_for(path: &Path) -> Option<PathBuf> {
    if path.extension()? != VAULT_EXTENSION {
        return None;
    }
    let stem = path.file_stem()?;
    Some(path.with_file_name(stem))
}

/// Hex salt of an artifact that has already decoded successfully.
fn salt_of(blob: &[u8]) -> String {
    blob.get(1..1 + SALT_LEN).map(hex::encode).unwrap_or_default()
}
