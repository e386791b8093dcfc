//! User registration and removal for keyward.

use tracing::info;

use crate::auth::validation::validate_username;
use crate::store::{CredentialStore, UserRecord, UserStorage};
use crate::{KeywardError, Result};

/// Check whether `username` can be registered.
///
/// Returns `Ok(true)` if the name is not taken. Fails with `AlreadyExists`
/// if it is taken, `Validation` if it is empty, or with the load error if
/// the table cannot be read.
pub fn is_valid_new_username<S: UserStorage>(
    store: &CredentialStore<S>,
    username: &str,
) -> Result<bool> {
    validate_username(username)?;

    if store.load_users()?.is_registered(username) {
        return Err(KeywardError::AlreadyExists("username".to_string()));
    }

    Ok(true)
}

/// Register a new user with the `Regular` role.
///
/// This function:
/// 1. Rejects an empty username
/// 2. Loads the table and rejects a taken username
/// 3. Inserts the record and rewrites the password file
///
/// # Examples
///
/// ```
/// use keyward::auth::register_user;
/// use keyward::store::{CredentialStore, MemoryStorage};
/// use keyward::KeywardError;
///
/// let store = CredentialStore::new(MemoryStorage::new());
/// register_user(&store, "alice", "secret").unwrap();
/// assert!(store.authenticate("alice", b"secret"));
///
/// let again = register_user(&store, "alice", "other");
/// assert!(matches!(again, Err(KeywardError::AlreadyExists(_))));
/// ```
pub fn register_user<S: UserStorage>(
    store: &CredentialStore<S>,
    username: &str,
    password: &str,
) -> Result<()> {
    validate_username(username)?;

    store.create(UserRecord::regular(username, password))?;

    info!(username = %username, "New user registered");
    Ok(())
}

/// Delete a user and rewrite the password file.
///
/// Fails with `NotFound` if the user does not exist.
pub fn delete_user<S: UserStorage>(store: &CredentialStore<S>, username: &str) -> Result<()> {
    let removed = store.delete(username)?;

    info!(
        username = %removed.username,
        role = %removed.role,
        "User deleted"
    );
    Ok(())
}
