//! Cache-policy fetch coordination over pluggable data sources.
//!
//! This crate provides:
//! - `DataSource` - Remote fetch plus local cache read/write, supplied by the host
//! - `CachePolicy` - Whether a read is served from cache, network, or both
//! - `FetchCoordinator` - Runs a policy against a data source and reports outcomes
//! - `FetchConfig` - Default policy and log scope, loadable from TOML or JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use appkit_data::{CachePolicy, FetchCoordinator};
//!
//! let coordinator = FetchCoordinator::builder(ProfileRepository::new(client, db))
//!     .on_success(move |profile| state.set_profile(profile.clone()))
//!     .on_error(move |err| state.set_error(err.code()))
//!     .build();
//!
//! // Emits the cached profile first (if any), then the fresh one.
//! coordinator.execute(CachePolicy::CacheAndNetwork).await?;
//! ```

mod config;
mod coordinator;
mod error;
mod policy;
mod source;

pub use config::*;
pub use coordinator::*;
pub use error::*;
pub use policy::*;
pub use source::*;
