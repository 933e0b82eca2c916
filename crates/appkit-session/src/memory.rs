//! In-memory session store.

use std::sync::RwLock;

use crate::{SessionError, SessionStore, SessionToken};

/// Process-local [`SessionStore`]. Not encrypted and not persisted.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<SessionToken>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `token`.
    pub fn with_token(token: impl Into<SessionToken>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<SessionToken>, SessionError> {
        let token = self.token.read().map_err(|_| SessionError::Poisoned)?;
        Ok(token.clone())
    }

    fn set(&self, token: SessionToken) -> Result<(), SessionError> {
        let mut slot = self.token.write().map_err(|_| SessionError::Poisoned)?;
        if slot.is_some() {
            tracing::debug!("replacing existing session token");
        }
        *slot = Some(token);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self.token.write().map_err(|_| SessionError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}
