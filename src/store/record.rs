//! User record model for keyward.
//!
//! This module defines the `UserRecord` struct, the `Role` enum and the
//! `UserTable` that a single load of the password file produces.

use std::collections::hash_map::{self, HashMap};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// User role for permission checks.
///
/// Only `Regular` and `Admin` carry meaning. Any other string found in the
/// password file is kept verbatim in `Other` so that it survives a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Regular user.
    #[default]
    Regular,
    /// Administrator.
    Admin,
    /// Unrecognized role string, stored as found.
    Other(String),
}

impl Role {
    /// Convert role to its stored string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Regular => "Regular",
            Role::Admin => "Admin",
            Role::Other(s) => s,
        }
    }

    /// Check whether this is one of the two roles the store understands.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Other(_))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Role {
    /// Parse a stored role. Matching is exact; `"admin"` is not `Admin`.
    fn from(s: &str) -> Self {
        match s {
            "Regular" => Role::Regular,
            "Admin" => Role::Admin,
            other => Role::Other(other.to_string()),
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from(s))
    }
}

/// One row of the password file.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Login username (unique key).
    pub username: String,
    /// Stored password, plaintext.
    pub password: String,
    /// User role.
    pub role: Role,
}

impl UserRecord {
    /// Create a record with an explicit role.
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    /// Create a record with the default `Regular` role.
    pub fn regular(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(username, password, Role::Regular)
    }

    /// Check if this user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Check if this user is a regular user.
    pub fn is_regular(&self) -> bool {
        self.role == Role::Regular
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// All records from one load of the password file, keyed by username.
///
/// A table is built fresh for each operation and dropped afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTable {
    users: HashMap<String, UserRecord>,
}

impl UserTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same username.
    ///
    /// Returns the replaced record, if any.
    pub fn insert(&mut self, record: UserRecord) -> Option<UserRecord> {
        self.users.insert(record.username.clone(), record)
    }

    /// Remove a record by username.
    pub fn remove(&mut self, username: &str) -> Option<UserRecord> {
        self.users.remove(username)
    }

    /// Get a record by username.
    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    /// Check if a username is present in this table.
    pub fn is_registered(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over records in no particular order.
    pub fn iter(&self) -> hash_map::Values<'_, String, UserRecord> {
        self.users.values()
    }

    /// Count records holding the given role.
    pub fn count_role(&self, role: &Role) -> usize {
        self.users.values().filter(|u| &u.role == role).count()
    }
}

impl FromIterator<UserRecord> for UserTable {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        let mut table = UserTable::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

impl Extend<UserRecord> for UserTable {
    fn extend<I: IntoIterator<Item = UserRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl IntoIterator for UserTable {
    type Item = UserRecord;
    type IntoIter = hash_map::IntoValues<String, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.into_values()
    }
}

impl<'a> IntoIterator for &'a UserTable {
    type Item = &'a UserRecord;
    type IntoIter = hash_map::Values<'a, String, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.values()
    }
}
