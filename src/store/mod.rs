//! Credential storage for keyward.
//!
//! This module provides the user record model, the CSV codec for the
//! password file, the storage backends and the credential store itself.

mod backend;
pub mod codec;
mod record;
mod repository;

pub use backend::{load_users, FileStorage, MemoryStorage, UserStorage};
pub use record::{Role, UserRecord, UserTable};
pub use repository::{is_password_valid, CredentialStore};
