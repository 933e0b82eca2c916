//! Cache policies for a single coordinator run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where a read is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CachePolicy {
    /// Local cache only. A miss is silent.
    CacheOnly,
    /// Cached value first (if any), then a network fetch that is written back.
    #[default]
    CacheAndNetwork,
    /// Network only, without writing back.
    NetworkOnly,
}

impl CachePolicy {
    /// All policies, in declaration order.
    pub const ALL: [CachePolicy; 3] = [
        CachePolicy::CacheOnly,
        CachePolicy::CacheAndNetwork,
        CachePolicy::NetworkOnly,
    ];

    /// Check if this policy reads the local cache.
    pub fn reads_cache(&self) -> bool {
        matches!(self, Self::CacheOnly | Self::CacheAndNetwork)
    }

    /// Check if this policy performs a remote fetch.
    pub fn hits_network(&self) -> bool {
        matches!(self, Self::CacheAndNetwork | Self::NetworkOnly)
    }

    /// Check if a fetched entity is written back to the cache.
    pub fn writes_back(&self) -> bool {
        matches!(self, Self::CacheAndNetwork)
    }

    /// Get the canonical name of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CacheOnly => "CACHE_ONLY",
            Self::CacheAndNetwork => "CACHE_AND_NETWORK",
            Self::NetworkOnly => "NETWORK_ONLY",
        }
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cache policy: {0}")]
pub struct ParsePolicyError(pub String);

impl FromStr for CachePolicy {
    type Err = ParsePolicyError;

    /// Accepts `CACHE_ONLY`, `cache_only` and `cache-only` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        CachePolicy::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ParsePolicyError(s.to_string()))
    }
}
