//! Role checks for keyward.
//!
//! These predicates work on an already-loaded table; they never touch
//! storage themselves.

use crate::store::{Role, UserTable};
use crate::{KeywardError, Result};

/// Look up the role of a user.
///
/// Fails with `NotFound` if the user is not in the table.
pub fn role_of<'a>(username: &str, table: &'a UserTable) -> Result<&'a Role> {
    table
        .get(username)
        .map(|user| &user.role)
        .ok_or_else(|| KeywardError::NotFound("user".to_string()))
}

/// Check if a user holds the `Regular` role.
///
/// # Examples
///
/// ```
/// use keyward::auth::is_regular_user;
/// use keyward::store::{Role, UserRecord, UserTable};
///
/// let table: UserTable = [
///     UserRecord::new("jdelgad", "pass", Role::Admin),
///     UserRecord::regular("newUser", "pass2"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(!is_regular_user("jdelgad", &table).unwrap());
/// assert!(is_regular_user("newUser", &table).unwrap());
/// assert!(is_regular_user("noSuchUser", &table).is_err());
/// ```
pub fn is_regular_user(username: &str, table: &UserTable) -> Result<bool> {
    Ok(*role_of(username, table)? == Role::Regular)
}

/// Check if a user holds the `Admin` role.
pub fn is_admin_user(username: &str, table: &UserTable) -> Result<bool> {
    Ok(*role_of(username, table)? == Role::Admin)
}
