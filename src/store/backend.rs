//! Storage backends for the user table.
//!
//! `UserStorage` is the seam between the credential logic and where the
//! password file actually lives. `FileStorage` reads and rewrites a file on
//! disk; `MemoryStorage` keeps the encoded bytes in memory for tests.
//!
//! Neither backend caches a table between calls, and neither locks: two
//! callers that load, modify and persist concurrently can overwrite each
//! other's changes. Use `StoreActor` to serialize callers within a process.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::codec;
use super::record::UserTable;
use crate::{KeywardError, Result};

/// Trait for loading and persisting the full user table.
pub trait UserStorage {
    /// Read the whole table.
    ///
    /// Fails with `NotFound` when the backing file does not exist.
    fn load(&self) -> Result<UserTable>;

    /// Replace the stored table with `table`.
    fn persist(&self, table: &UserTable) -> Result<()>;
}

impl<S: UserStorage + ?Sized> UserStorage for &S {
    fn load(&self) -> Result<UserTable> {
        (**self).load()
    }

    fn persist(&self, table: &UserTable) -> Result<()> {
        (**self).persist(table)
    }
}

fn password_file_not_found() -> KeywardError {
    KeywardError::NotFound("password file".to_string())
}

/// Password file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage for the file at `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserStorage for FileStorage {
    fn load(&self) -> Result<UserTable> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => password_file_not_found(),
            _ => KeywardError::Io(e),
        })?;

        let table = codec::decode(BufReader::new(file))?;
        debug!(users = table.len(), "Loaded password file");
        Ok(table)
    }

    fn persist(&self, table: &UserTable) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        codec::encode(table, &mut file)?;
        file.sync_all()?;

        debug!(users = table.len(), "Rewrote password file");
        Ok(())
    }
}

/// Load a table straight from a password file.
///
/// # Examples
///
/// ```
/// use keyward::{store::load_users, KeywardError};
///
/// let result = load_users("does/not/exist/passwd");
/// assert!(matches!(result, Err(KeywardError::NotFound(_))));
/// ```
pub fn load_users(path: impl AsRef<Path>) -> Result<UserTable> {
    FileStorage::new(path.as_ref()).load()
}

/// In-memory stand-in for a password file.
///
/// Holds the encoded file contents, so loads and persists still go through
/// the codec. `None` models a missing file.
#[derive(Debug)]
pub struct MemoryStorage {
    contents: Mutex<Option<Vec<u8>>>,
}

impl MemoryStorage {
    /// Create a storage holding an empty file.
    pub fn new() -> Self {
        Self::with_contents(Vec::new())
    }

    /// Create a storage holding the given raw file contents.
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }

    /// Create a storage whose file does not exist.
    pub fn missing() -> Self {
        Self {
            contents: Mutex::new(None),
        }
    }

    /// Current raw file contents, or `None` if the file is missing.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<u8>>> {
        self.contents.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStorage for MemoryStorage {
    fn load(&self) -> Result<UserTable> {
        match self.lock().as_deref() {
            Some(bytes) => codec::decode(bytes),
            None => Err(password_file_not_found()),
        }
    }

    fn persist(&self, table: &UserTable) -> Result<()> {
        let bytes = codec::encode_to_vec(table)?;
        *self.lock() = Some(bytes);
        Ok(())
    }
}
