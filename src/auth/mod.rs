//! Authentication module for keyward.
//!
//! This module provides login sessions, role checks, user registration
//! and removal, and a single-writer actor around the credential store.

mod actor;
mod permission;
mod registration;
mod session;
pub mod validation;

pub use actor::{StoreActor, StoreHandle};
pub use permission::{is_admin_user, is_regular_user, role_of};
pub use registration::{delete_user, is_valid_new_username, register_user};
pub use session::{is_logged_in, login, Session};
pub use validation::ValidationError;
