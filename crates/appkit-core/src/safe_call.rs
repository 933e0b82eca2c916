//! Adapters that turn failing or panicking calls into `NetworkResult`.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::{NetworkError, NetworkResult};

/// Run `op`, converting an `Err` or a panic into `NetworkResult::Error`.
///
/// A `NetworkResult` returned by `op` passes through untouched, so the
/// operation can still report its own structured errors (status codes).
///
/// ```rust,ignore
/// let result = safe_call(|| {
///     let response = client.get(url).send()?;
///     if !response.is_success() {
///         return Ok(NetworkResult::Error(NetworkError::from_status(response.status)));
///     }
///     Ok(NetworkResult::Success(response.json()?))
/// });
/// ```
pub fn safe_call<T, F>(op: F) -> NetworkResult<T>
where
    F: FnOnce() -> anyhow::Result<NetworkResult<T>>,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(outcome) => flatten(outcome),
        Err(payload) => from_panic(payload),
    }
}

/// Async variant of [`safe_call`].
///
/// Panics raised while polling `op` are caught at every suspension point.
pub async fn safe_call_async<T, Fut>(op: Fut) -> NetworkResult<T>
where
    Fut: Future<Output = anyhow::Result<NetworkResult<T>>>,
{
    match AssertUnwindSafe(op).catch_unwind().await {
        Ok(outcome) => flatten(outcome),
        Err(payload) => from_panic(payload),
    }
}

fn flatten<T>(outcome: anyhow::Result<NetworkResult<T>>) -> NetworkResult<T> {
    match outcome {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "call failed, converting to network error");
            NetworkResult::Error(NetworkError::new().with_cause(e))
        }
    }
}

fn from_panic<T>(payload: Box<dyn Any + Send>) -> NetworkResult<T> {
    let message = panic_message(payload.as_ref());
    tracing::warn!(panic = %message, "call panicked, converting to network error");
    NetworkResult::Error(
        NetworkError::new().with_cause(anyhow::anyhow!("operation panicked: {}", message)),
    )
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
