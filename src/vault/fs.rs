//! Filesystem access used by `VaultSession`.
//!
//! The session never touches `std::fs` directly; it goes through the
//! `VaultFs` trait so embedders can store artifacts elsewhere and tests
//! can run against memory.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::errors::{Result, VaultGuardError};

/// Opaque byte storage keyed by path.
pub trait VaultFs {
    /// Read a whole file.  A missing file is `VaultGuardError::NotFound`.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Create or replace a whole file.  Failures are `VaultGuardError::WriteError`.
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// The local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl VaultFs for LocalFs {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => VaultGuardError::NotFound(path.to_path_buf()),
            _ => VaultGuardError::Io(e),
        })
    }

    /// Write **atomically**: temp file in the same directory, then rename.
    ///
    /// Readers never see a half-written file.  On Unix the temp file is
    /// created owner-only (0600), so the bytes are never world-readable.
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let write_err = |source: std::io::Error| VaultGuardError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));

        let mut file = create_private(&tmp_path).map_err(write_err)?;
        if let Err(e) = file.write_all(bytes).and_then(|()| file.sync_all()) {
            drop(file);
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(e));
        }
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(e));
        }

        Ok(())
    }
}

/// Create `tmp_path` exclusively, never following a link already there.
///
/// A leftover entry (a stale temp file from a crash, or a planted
/// symlink) is unlinked and creation retried once.
fn create_private(tmp_path: &Path) -> std::io::Result<File> {
    match open_new(tmp_path) {
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            fs::remove_file(tmp_path)?;
            open_new(tmp_path)
        }
        other => other,
    }
}

#[cfg(unix)]
fn open_new(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_new(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
