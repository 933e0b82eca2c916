//! Success/error outcome of a remote call.

use std::fmt;

/// Structured failure of a remote call.
///
/// Both parts are optional: a transport failure usually carries only a
/// cause, an HTTP failure usually carries only a status code.
///
/// Codes are `u16`: HTTP statuses and application codes in `0..=65535`.
/// Codes outside that range belong in the cause.
#[derive(Debug, Default)]
pub struct NetworkError {
    cause: Option<anyhow::Error>,
    code: Option<u16>,
}

impl NetworkError {
    /// Create an error with neither cause nor code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error from an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        Self::new().with_code(status)
    }

    /// Set the status code.
    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the underlying cause.
    pub fn with_cause(mut self, cause: impl Into<anyhow::Error>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Get the status code, if any.
    pub fn code(&self) -> Option<u16> {
        self.code
    }

    /// Get the underlying cause, if any.
    pub fn cause(&self) -> Option<&anyhow::Error> {
        self.cause.as_ref()
    }

    /// Take the underlying cause out of the error.
    pub fn into_cause(self) -> Option<anyhow::Error> {
        self.cause
    }

    /// Check if the code is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self.code, Some(code) if (400..500).contains(&code))
    }

    /// Check if the code is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self.code, Some(code) if (500..600).contains(&code))
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.cause) {
            (Some(code), Some(cause)) => write!(f, "network error {}: {}", code, cause),
            (Some(code), None) => write!(f, "network error {}", code),
            (None, Some(cause)) => write!(f, "network error: {}", cause),
            (None, None) => write!(f, "network error"),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn std::error::Error + 'static))
    }
}

/// Outcome of a fallible remote call.
///
/// Exactly one variant is active; `Error` never carries a `T`.
///
/// ```rust,ignore
/// repository.fetch().await
///     .on_success(|user| state.set_user(user.clone()))
///     .on_error(|err| state.set_error(err.code()));
/// ```
#[derive(Debug)]
#[must_use]
pub enum NetworkResult<T> {
    /// The call produced a value.
    Success(T),
    /// The call failed.
    Error(NetworkError),
}

impl<T> NetworkResult<T> {
    /// Create a successful result.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Create a failed result.
    pub fn error(error: NetworkError) -> Self {
        Self::Error(error)
    }

    /// Check if this is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Run `f` with the value if this is a success, then return `self` unchanged.
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` with the error if this is an error, then return `self` unchanged.
    pub fn on_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&NetworkError),
    {
        if let Self::Error(error) = &self {
            f(error);
        }
        self
    }

    /// Convert to the success value, discarding any error.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Convert to the error, discarding any success value.
    pub fn err(self) -> Option<NetworkError> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Map the success value, leaving errors untouched.
    pub fn map<U, F>(self, f: F) -> NetworkResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => NetworkResult::Success(f(value)),
            Self::Error(error) => NetworkResult::Error(error),
        }
    }

    /// Convert into a standard `Result` for use with `?`.
    pub fn into_result(self) -> Result<T, NetworkError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for NetworkResult<T>
where
    E: Into<anyhow::Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(e) => Self::Error(NetworkError::new().with_cause(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // === NetworkError Tests ===

    #[test]
    fn test_error_from_status() {
        let err = NetworkError::from_status(503);
        assert_eq!(err.code(), Some(503));
        assert!(err.cause().is_none());
        assert!(err.is_server_error());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_error_code_full_range() {
        assert_eq!(NetworkError::new().with_code(u16::MAX).code(), Some(65535));
        assert_eq!(NetworkError::new().with_code(0).code(), Some(0));
        assert!(!NetworkError::new().with_code(9001).is_server_error());
    }

    #[test]
    fn test_error_client_range() {
        assert!(NetworkError::from_status(404).is_client_error());
        assert!(!NetworkError::from_status(399).is_client_error());
        assert!(!NetworkError::new().is_client_error());
        assert!(!NetworkError::new().is_server_error());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(NetworkError::new().to_string(), "network error");
        assert_eq!(NetworkError::from_status(500).to_string(), "network error 500");

        let err = NetworkError::new().with_cause(anyhow::anyhow!("connection reset"));
        assert_eq!(err.to_string(), "network error: connection reset");

        let err = NetworkError::from_status(502).with_cause(anyhow::anyhow!("bad gateway"));
        assert_eq!(err.to_string(), "network error 502: bad gateway");
    }

    #[test]
    fn test_error_source_is_cause() {
        use std::error::Error;

        let err = NetworkError::new().with_cause(anyhow::anyhow!("dns failure"));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("dns failure"));

        assert!(NetworkError::from_status(500).source().is_none());
    }

    // === Combinator Tests ===

    #[test]
    fn test_on_success_invoked_for_success() {
        let calls = Cell::new(0);
        let seen = Cell::new(0);

        let result = NetworkResult::success(7)
            .on_success(|v| {
                calls.set(calls.get() + 1);
                seen.set(*v);
            })
            .on_error(|_| panic!("error handler must not run"));

        assert_eq!(calls.get(), 1);
        assert_eq!(seen.get(), 7);
        assert_eq!(result.ok(), Some(7));
    }

    #[test]
    fn test_on_error_invoked_for_error() {
        let calls = Cell::new(0);
        let code = Cell::new(None);

        let result: NetworkResult<i32> = NetworkResult::error(NetworkError::from_status(500))
            .on_success(|_| panic!("success handler must not run"))
            .on_error(|e| {
                calls.set(calls.get() + 1);
                code.set(e.code());
            });

        assert_eq!(calls.get(), 1);
        assert_eq!(code.get(), Some(500));
        assert!(result.is_error());
    }

    #[test]
    fn test_combinators_return_same_instance() {
        let result = NetworkResult::success(String::from("payload"))
            .on_error(|_| {})
            .on_success(|_| {});
        assert_eq!(result.ok().as_deref(), Some("payload"));
    }

    // === Conversion Tests ===

    #[test]
    fn test_map_success() {
        let result = NetworkResult::success(2).map(|v| v * 10);
        assert_eq!(result.ok(), Some(20));
    }

    #[test]
    fn test_map_keeps_error() {
        let result: NetworkResult<i32> = NetworkResult::error(NetworkError::from_status(401));
        let mapped = result.map(|v| v + 1);
        assert_eq!(mapped.err().and_then(|e| e.code()), Some(401));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(NetworkResult::success(1).into_result().ok(), Some(1));

        let result: NetworkResult<i32> = NetworkResult::error(NetworkError::from_status(418));
        let err = result.into_result().unwrap_err();
        assert_eq!(err.code(), Some(418));
    }

    #[test]
    fn test_from_std_result() {
        let ok: NetworkResult<u8> = Ok::<u8, std::io::Error>(3).into();
        assert!(ok.is_success());

        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let failed: NetworkResult<u8> = Err::<u8, _>(io).into();
        let err = failed.err().unwrap();
        assert!(err.code().is_none());
        assert_eq!(err.cause().unwrap().to_string(), "timed out");
    }
}
