//! Outcome types and small value wrappers shared by the appkit crates.
//!
//! This crate provides:
//! - `NetworkResult` - Success/error outcome of a remote call
//! - `NetworkError` - Structured error with optional status code and cause
//! - `safe_call` / `safe_call_async` - Convert failures and panics into `NetworkResult`
//! - `OneShot` / `SharedOneShot` - Values that can be taken exactly once
//!
//! # Example
//!
//! ```rust,ignore
//! use appkit_core::{safe_call, NetworkResult};
//!
//! let result = safe_call(|| {
//!     let body = transport.get("/profile")?;
//!     Ok(NetworkResult::Success(body))
//! });
//!
//! result
//!     .on_success(|body| render(body))
//!     .on_error(|err| show_banner(err));
//! ```

mod event;
mod result;
mod safe_call;

pub use event::{OneShot, SharedOneShot};
pub use result::{NetworkError, NetworkResult};
pub use safe_call::{safe_call, safe_call_async};
