//! Login sessions for keyward.
//!
//! A `Session` is the outcome of one login attempt: the matched user and
//! whether the password was right. Sessions are not stored anywhere and
//! never expire; they live as long as the caller keeps them.

use tracing::debug;

use crate::store::{is_password_valid, UserRecord, UserTable};
use crate::{KeywardError, Result};

/// Result of a login attempt against a loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: UserRecord,
    active: bool,
}

impl Session {
    /// The user this session was opened for.
    pub fn user(&self) -> &UserRecord {
        &self.user
    }

    /// Username of the session's user.
    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// Whether the password matched at login.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check if `username` is logged in through this session.
    pub fn is_logged_in(&self, username: &str) -> bool {
        self.active && self.user.username == username
    }
}

/// Open a session for `username`.
///
/// Fails with `NotFound` only when the user is not in the table. A wrong
/// password still yields a session, marked inactive; callers must check
/// [`Session::is_active`].
///
/// # Examples
///
/// ```
/// use keyward::auth::login;
/// use keyward::store::{Role, UserRecord, UserTable};
///
/// let table: UserTable = [UserRecord::new("jdelgad", "pass", Role::Admin)]
///     .into_iter()
///     .collect();
///
/// assert!(login("jdelgad", "pass", &table).unwrap().is_active());
/// assert!(!login("jdelgad", "wrong", &table).unwrap().is_active());
/// assert!(login("nobody", "pass", &table).is_err());
/// ```
pub fn login(username: &str, password: &str, table: &UserTable) -> Result<Session> {
    let user = table
        .get(username)
        .ok_or_else(|| KeywardError::NotFound("user".to_string()))?;

    let active = is_password_valid(password.as_bytes(), &user.password);
    debug!(username = %username, active, "Session opened");

    Ok(Session {
        user: user.clone(),
        active,
    })
}

/// Check if `username` is logged in through `session`.
pub fn is_logged_in(username: &str, session: &Session) -> bool {
    session.is_logged_in(username)
}
