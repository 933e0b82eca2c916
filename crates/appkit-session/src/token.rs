//! Session token type.

use serde::{Deserialize, Serialize};

/// An opaque session token.
///
/// `Debug` never prints the token itself; use [`SessionToken::as_str`] when
/// the raw value is needed (e.g. for an `Authorization` header).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a token from its raw value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw token value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken(<redacted, {} bytes>)", self.0.len())
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
