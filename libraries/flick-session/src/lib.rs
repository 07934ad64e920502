//! Flick Session Store
//!
//! Persistent key-value storage for the client's session state: a single
//! JSON file holding namespaced keys with JSON values. The only record the
//! app keeps here today is the authenticated user's profile snapshot,
//! written on login/register/profile-update and cleared on logout.
//!
//! The snapshot is a best-effort cache of server state, trusted by screens
//! between auth round-trips; the server remains the source of truth.
//!
//! # Example
//!
//! ```rust,no_run
//! use flick_session::SessionStore;
//! # async fn example(user: flick_core::User) -> Result<(), flick_session::SessionStoreError> {
//! let store = SessionStore::open("/tmp/flick").await?;
//! store.save_user(&user).await?;
//! assert!(store.load_user().await.is_some());
//! store.clear_user().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

pub use error::{Result, SessionStoreError};
pub use store::{SessionStore, KEY_USER};
