//! Credential store for keyward.
//!
//! Every operation reloads the full table from storage. Mutations then
//! rewrite the whole table. Nothing is cached between calls.

use std::path::PathBuf;

use super::backend::{FileStorage, UserStorage};
use super::record::{UserRecord, UserTable};
use crate::{KeywardError, Result};

/// Compare a supplied password with a stored one.
///
/// Exact byte equality: no trimming, no normalization, no hashing.
pub fn is_password_valid(supplied: &[u8], stored: &str) -> bool {
    supplied == stored.as_bytes()
}

/// Credential store over an injected storage backend.
#[derive(Debug, Clone)]
pub struct CredentialStore<S = FileStorage> {
    storage: S,
}

impl CredentialStore<FileStorage> {
    /// Create a store backed by the password file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStorage::new(path))
    }
}

impl<S: UserStorage> CredentialStore<S> {
    /// Create a store over the given storage.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get a reference to the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load a fresh copy of the user table.
    pub fn load_users(&self) -> Result<UserTable> {
        self.storage.load()
    }

    /// Check if a username is registered.
    ///
    /// Returns false if the table cannot be loaded.
    pub fn user_exists(&self, username: &str) -> bool {
        self.load_users()
            .map(|table| table.is_registered(username))
            .unwrap_or(false)
    }

    /// Get a user by username.
    pub fn get_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let mut table = self.load_users()?;
        Ok(table.remove(username))
    }

    /// Stored password for a user, if the user exists and the table loads.
    pub fn password_for(&self, username: &str) -> Option<String> {
        self.get_by_username(username)
            .ok()
            .flatten()
            .map(|user| user.password)
    }

    /// Check a username and password against a fresh load.
    ///
    /// Returns false for unknown users, wrong passwords, and load failures.
    pub fn authenticate(&self, username: &str, password: &[u8]) -> bool {
        self.password_for(username)
            .is_some_and(|stored| is_password_valid(password, &stored))
    }

    /// Insert a new record and persist the table.
    ///
    /// Fails with `AlreadyExists` if the username is already present in a
    /// fresh load. The existence check and the rewrite are not atomic with
    /// respect to other writers.
    pub fn create(&self, record: UserRecord) -> Result<()> {
        let mut table = self.load_users()?;
        if table.is_registered(&record.username) {
            return Err(KeywardError::AlreadyExists("username".to_string()));
        }

        table.insert(record);
        self.storage.persist(&table)
    }

    /// Remove a record and persist the table.
    ///
    /// Fails with `NotFound` if the username is absent.
    pub fn delete(&self, username: &str) -> Result<UserRecord> {
        let mut table = self.load_users()?;
        let removed = table
            .remove(username)
            .ok_or_else(|| KeywardError::NotFound("user".to_string()))?;

        self.storage.persist(&table)?;
        Ok(removed)
    }

    /// Overwrite the stored table.
    pub fn persist(&self, table: &UserTable) -> Result<()> {
        self.storage.persist(table)
    }
}
