//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use appkit_sdk::prelude::*;
//! ```

// Outcomes and one-shot values
pub use appkit_core::{
    safe_call, safe_call_async, NetworkError, NetworkResult, OneShot, SharedOneShot,
};

// Fetch coordination
pub use appkit_data::{CachePolicy, CoordinatorError, DataSource, FetchConfig, FetchCoordinator};

// Sessions
pub use appkit_session::{MemorySessionStore, SessionError, SessionStore, SessionToken};

// Needed to implement `DataSource`
pub use async_trait::async_trait;
