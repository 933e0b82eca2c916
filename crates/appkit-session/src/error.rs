//! Session storage errors.

use thiserror::Error;

/// Errors that can occur when reading or writing the session token.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The backing store failed. Raised by host store implementations,
    /// usually through [`SessionError::backend`].
    #[error("session backend error: {0}")]
    Backend(String),

    /// A writer panicked while holding the store lock.
    #[error("session store lock poisoned")]
    Poisoned,
}

impl SessionError {
    /// Wrap a failure reported by a backing store (keychain, keystore, file).
    pub fn backend(err: impl std::fmt::Display) -> Self {
        SessionError::Backend(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "keychain locked");
        let err = SessionError::backend(io);
        assert!(matches!(err, SessionError::Backend(ref msg) if msg == "keychain locked"));
        assert_eq!(err.to_string(), "session backend error: keychain locked");
    }

    #[test]
    fn test_poisoned_display() {
        assert_eq!(SessionError::Poisoned.to_string(), "session store lock poisoned");
    }
}
