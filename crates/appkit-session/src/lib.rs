//! Session token storage contract.
//!
//! The host application owns persistence of the session token and should
//! back [`SessionStore`] with encrypted platform storage (keychain, keystore,
//! encrypted preferences). [`MemorySessionStore`] is a process-local
//! reference implementation for tests and development.
//!
//! # Example
//!
//! ```rust,ignore
//! use appkit_session::{MemorySessionStore, SessionStore};
//!
//! let store = MemorySessionStore::new();
//! store.set("sid-123".into())?;
//! let token = store.get()?;
//! store.clear()?;
//! ```

mod error;
mod memory;
mod token;

pub use error::SessionError;
pub use memory::MemorySessionStore;
pub use token::SessionToken;

/// Storage for the current session token.
///
/// Implementations decide where the token lives; they must be safe to call
/// from any thread.
pub trait SessionStore: Send + Sync {
    /// Get the stored token, if any.
    fn get(&self) -> Result<Option<SessionToken>, SessionError>;

    /// Store a token, replacing any previous one.
    fn set(&self, token: SessionToken) -> Result<(), SessionError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn get(&self) -> Result<Option<SessionToken>, SessionError> {
        (**self).get()
    }

    fn set(&self, token: SessionToken) -> Result<(), SessionError> {
        (**self).set(token)
    }

    fn clear(&self) -> Result<(), SessionError> {
        (**self).clear()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemorySessionStore, SessionError, SessionStore, SessionToken};
}
