//! Binary vault artifact format.
//!
//! A `.vault` file has this layout (integers little-endian):
//!
//! ```text
//! [version: 1 byte][salt: 16 bytes][nonce: 12 bytes][ciphertext_len: u32 LE][ciphertext: N bytes][tag: 16 bytes]
//! ```
//!
//! - **Version**: format version (currently `1`).
//! - **Salt**: PBKDF2 salt, fresh per artifact.
//! - **Nonce**: AES-256-GCM nonce, fresh per artifact.
//! - **Ciphertext length**: must equal the bytes between the length
//!   field and the tag.
//! - **Tag**: GCM authentication tag.
//!
//! The version byte and salt together form the *header*, which the
//! session feeds to the cipher as associated data.
//!
//! Nothing here is cryptographic; this module only (de)serializes.

use crate::crypto::{NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::errors::FormatError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;

/// Size of the ciphertext length field.
const LEN_FIELD: usize = 4;

const SALT_START: usize = 1;
const NONCE_START: usize = SALT_START + SALT_LEN;
const LEN_START: usize = NONCE_START + NONCE_LEN;
const CIPHERTEXT_START: usize = LEN_START + LEN_FIELD;

/// Version byte + salt.
pub const HEADER_LEN: usize = NONCE_START;

/// Smallest valid artifact: every fixed field and an empty ciphertext (49 bytes).
pub const MIN_ARTIFACT_LEN: usize = CIPHERTEXT_START + TAG_LEN;

// ---------------------------------------------------------------------------
// VaultArtifact
// ---------------------------------------------------------------------------

/// The parsed contents of a `.vault` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultArtifact {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
}

impl VaultArtifact {
    /// The header bytes (version ‖ salt) authenticated alongside the ciphertext.
    pub fn header(&self) -> [u8; HEADER_LEN] {
        header_bytes(&self.salt)
    }

    /// Size of this artifact once encoded.
    pub fn encoded_len(&self) -> usize {
        MIN_ARTIFACT_LEN + self.ciphertext.len()
    }
}

/// Build the header for a given salt under the current format version.
pub fn header_bytes(salt: &[u8; SALT_LEN]) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[0] = FORMAT_VERSION;
    header[SALT_START..].copy_from_slice(salt);
    header
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Encode an artifact into its on-disk form.
///
/// Only fails if the ciphertext is longer than `u32::MAX` bytes.
pub fn encode(artifact: &VaultArtifact) -> Result<Vec<u8>, FormatError> {
    let ct_len = u32::try_from(artifact.ciphertext.len())
        .map_err(|_| FormatError::CiphertextTooLarge(artifact.ciphertext.len()))?;

    let mut buf = Vec::with_capacity(artifact.encoded_len());
    buf.push(FORMAT_VERSION); // 1 byte
    buf.extend_from_slice(&artifact.salt); // 16 bytes
    buf.extend_from_slice(&artifact.nonce); // 12 bytes
    buf.extend_from_slice(&ct_len.to_le_bytes()); // 4 bytes LE
    buf.extend_from_slice(&artifact.ciphertext); // N bytes
    buf.extend_from_slice(&artifact.tag); // 16 bytes
    Ok(buf)
}

/// Parse an artifact, validating length and version before slicing.
pub fn decode(blob: &[u8]) -> Result<VaultArtifact, FormatError> {
    if blob.len() < MIN_ARTIFACT_LEN {
        return Err(FormatError::Truncated {
            needed: MIN_ARTIFACT_LEN,
            actual: blob.len(),
        });
    }

    let version = blob[0];
    if version != FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion(version));
    }

    // --- Fixed-size fields ---

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&blob[SALT_START..NONCE_START]);

    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&blob[NONCE_START..LEN_START]);

    let mut len_bytes = [0u8; LEN_FIELD];
    len_bytes.copy_from_slice(&blob[LEN_START..CIPHERTEXT_START]);
    let declared = u32::from_le_bytes(len_bytes) as usize;

    // --- Ciphertext length must account for every remaining byte ---

    let available = blob.len() - MIN_ARTIFACT_LEN;
    if declared > available {
        return Err(FormatError::Truncated {
            needed: MIN_ARTIFACT_LEN.saturating_add(declared),
            actual: blob.len(),
        });
    }
    if declared < available {
        return Err(FormatError::LengthMismatch {
            declared,
            actual: available,
        });
    }

    let ciphertext_end = CIPHERTEXT_START + declared;
    let ciphertext = blob[CIPHERTEXT_START..ciphertext_end].to_vec();

    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&blob[ciphertext_end..]);

    Ok(VaultArtifact {
        salt,
        nonce,
        ciphertext,
        tag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VaultArtifact {
        VaultArtifact {
            salt: [0x11; SALT_LEN],
            nonce: [0x22; NONCE_LEN],
            ciphertext: vec![0x33; 5],
            tag: [0x44; TAG_LEN],
        }
    }

    #[test]
    fn minimum_length_is_49() {
        assert_eq!(MIN_ARTIFACT_LEN, 49);
        assert_eq!(HEADER_LEN, 17);
    }

    #[test]
    fn encode_places_fields_at_fixed_offsets() {
        let blob = encode(&sample()).unwrap();
        assert_eq!(blob.len(), 49 + 5);
        assert_eq!(blob[0], FORMAT_VERSION);
        assert_eq!(&blob[1..17], &[0x11; 16]);
        assert_eq!(&blob[17..29], &[0x22; 12]);
        assert_eq!(&blob[29..33], &5u32.to_le_bytes());
        assert_eq!(&blob[33..38], &[0x33; 5]);
        assert_eq!(&blob[38..], &[0x44; 16]);
    }

    #[test]
    fn header_is_version_then_salt() {
        let artifact = sample();
        let header = artifact.header();
        assert_eq!(header[0], 1);
        assert_eq!(&header[1..], &artifact.salt);
    }

    #[test]
    fn empty_ciphertext_is_valid() {
        let artifact = VaultArtifact {
            ciphertext: Vec::new(),
            ..sample()
        };
        let blob = encode(&artifact).unwrap();
        assert_eq!(blob.len(), MIN_ARTIFACT_LEN);
        assert_eq!(decode(&blob).unwrap(), artifact);
    }

    #[test]
    fn short_blob_reports_truncation_before_version() {
        // A 10-byte blob with a bogus version still reads as truncated.
        let mut blob = [0u8; 10];
        blob[0] = 99;
        assert_eq!(
            decode(&blob),
            Err(FormatError::Truncated {
                needed: 49,
                actual: 10
            })
        );
    }
}
