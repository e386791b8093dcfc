//! keyward - flat-file credential store
//!
//! Username/password authentication backed by a CSV password file, with
//! login sessions and two roles (Regular, Admin). Passwords are stored and
//! compared as plaintext.

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;

pub use auth::{
    delete_user, is_admin_user, is_logged_in, is_regular_user, is_valid_new_username, login,
    register_user, Session, StoreActor, StoreHandle, ValidationError,
};
pub use config::Config;
pub use error::{KeywardError, Result};
pub use store::{
    is_password_valid, load_users, CredentialStore, FileStorage, MemoryStorage, Role, UserRecord,
    UserStorage, UserTable,
};
