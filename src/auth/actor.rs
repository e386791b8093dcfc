//! StoreActor: single-writer mediator for the credential store.
//!
//! `CredentialStore` does not lock: two callers that load before either
//! persists will lose one update. Routing every operation of a process
//! through one `StoreActor` removes that race within the process. Other
//! processes writing the same file are not covered.
//!
//! Requests are handled one at a time on a blocking thread, since the
//! store does synchronous file I/O.
//!
//! # Usage
//!
//! ```rust,no_run
//! use keyward::auth::StoreActor;
//! use keyward::store::FileStorage;
//!
//! #[tokio::main]
//! async fn main() -> keyward::Result<()> {
//!     let handle = StoreActor::spawn(FileStorage::new("passwd"));
//!
//!     handle.register_user("alice".into(), "secret".into()).await?;
//!     assert!(handle.authenticate("alice".into(), b"secret".to_vec()).await);
//!
//!     Ok(())
//! }
//! ```

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::auth::registration::{delete_user, is_valid_new_username, register_user};
use crate::store::{CredentialStore, UserStorage, UserTable};
use crate::{KeywardError, Result};

/// Queue depth for pending requests.
const CHANNEL_CAPACITY: usize = 64;

enum StoreMsg {
    LoadUsers {
        reply: oneshot::Sender<Result<UserTable>>,
    },
    UserExists {
        username: String,
        reply: oneshot::Sender<bool>,
    },
    Authenticate {
        username: String,
        password: Vec<u8>,
        reply: oneshot::Sender<bool>,
    },
    IsValidNewUsername {
        username: String,
        reply: oneshot::Sender<Result<bool>>,
    },
    RegisterUser {
        username: String,
        password: String,
        reply: oneshot::Sender<Result<()>>,
    },
    DeleteUser {
        username: String,
        reply: oneshot::Sender<Result<()>>,
    },
}

/// Owns a credential store and applies requests to it in arrival order.
pub struct StoreActor<S> {
    store: CredentialStore<S>,
    rx: mpsc::Receiver<StoreMsg>,
}

impl<S> StoreActor<S>
where
    S: UserStorage + Send + 'static,
{
    /// Spawn the actor and return a handle for sending requests.
    ///
    /// Must be called from within a Tokio runtime. The actor stops once
    /// every handle has been dropped.
    ///
    /// The actor occupies a blocking-pool thread until then, and runtime
    /// shutdown waits for blocking threads. A handle leaked into a detached
    /// task, or stored in a `static`, keeps the thread alive and stalls
    /// shutdown. Drop all handles before the runtime exits, or shut it down
    /// with `Runtime::shutdown_timeout`.
    pub fn spawn(storage: S) -> StoreHandle {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let actor = Self {
            store: CredentialStore::new(storage),
            rx,
        };

        tokio::task::spawn_blocking(move || actor.run());
        debug!("StoreActor spawned");
        StoreHandle { tx }
    }

    fn run(mut self) {
        while let Some(msg) = self.rx.blocking_recv() {
            match msg {
                StoreMsg::LoadUsers { reply } => {
                    let _ = reply.send(self.store.load_users());
                }
                StoreMsg::UserExists { username, reply } => {
                    let _ = reply.send(self.store.user_exists(&username));
                }
                StoreMsg::Authenticate {
                    username,
                    password,
                    reply,
                } => {
                    let _ = reply.send(self.store.authenticate(&username, &password));
                }
                StoreMsg::IsValidNewUsername { username, reply } => {
                    let _ = reply.send(is_valid_new_username(&self.store, &username));
                }
                StoreMsg::RegisterUser {
                    username,
                    password,
                    reply,
                } => {
                    let _ = reply.send(register_user(&self.store, &username, &password));
                }
                StoreMsg::DeleteUser { username, reply } => {
                    let _ = reply.send(delete_user(&self.store, &username));
                }
            }
        }
        debug!("StoreActor stopped");
    }
}

fn unavailable() -> KeywardError {
    KeywardError::Unavailable("store actor".to_string())
}

/// Cloneable handle to a running `StoreActor`.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<StoreMsg>,
}

impl StoreHandle {
    async fn request<T>(&self, msg: impl FnOnce(oneshot::Sender<T>) -> StoreMsg) -> Option<T> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(msg(reply)).await.ok()?;
        rx.await.ok()
    }

    /// Load a fresh copy of the user table.
    pub async fn load_users(&self) -> Result<UserTable> {
        self.request(|reply| StoreMsg::LoadUsers { reply })
            .await
            .ok_or_else(unavailable)?
    }

    /// Check if a username is registered. False if the actor is gone.
    pub async fn user_exists(&self, username: String) -> bool {
        self.request(|reply| StoreMsg::UserExists { username, reply })
            .await
            .unwrap_or(false)
    }

    /// Check a username and password. False if the actor is gone.
    pub async fn authenticate(&self, username: String, password: Vec<u8>) -> bool {
        self.request(|reply| StoreMsg::Authenticate {
            username,
            password,
            reply,
        })
        .await
        .unwrap_or(false)
    }

    /// Check whether `username` can be registered.
    pub async fn is_valid_new_username(&self, username: String) -> Result<bool> {
        self.request(|reply| StoreMsg::IsValidNewUsername { username, reply })
            .await
            .ok_or_else(unavailable)?
    }

    /// Register a new `Regular` user.
    pub async fn register_user(&self, username: String, password: String) -> Result<()> {
        self.request(|reply| StoreMsg::RegisterUser {
            username,
            password,
            reply,
        })
        .await
        .ok_or_else(unavailable)?
    }

    /// Delete a user.
    pub async fn delete_user(&self, username: String) -> Result<()> {
        self.request(|reply| StoreMsg::DeleteUser { username, reply })
            .await
            .ok_or_else(unavailable)?
    }
}

impl std::fmt::Debug for StoreMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreMsg::LoadUsers { .. } => "LoadUsers",
            StoreMsg::UserExists { .. } => "UserExists",
            StoreMsg::Authenticate { .. } => "Authenticate",
            StoreMsg::IsValidNewUsername { .. } => "IsValidNewUsername",
            StoreMsg::RegisterUser { .. } => "RegisterUser",
            StoreMsg::DeleteUser { .. } => "DeleteUser",
        };
        f.write_str(name)
    }
}
