//! Runs a cache policy against a data source.

use appkit_core::{NetworkError, NetworkResult};
use tracing::Instrument;

use crate::{CachePolicy, CoordinatorError, DataSource, FetchConfig};

/// Callback invoked with every entity the coordinator surfaces.
pub type SuccessCallback<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Callback invoked with every remote fetch failure.
pub type ErrorCallback = Box<dyn Fn(NetworkError) + Send + Sync>;

/// Relays entities from a [`DataSource`] to callbacks according to a [`CachePolicy`].
///
/// Both callbacks are fixed at construction, so there is no way to run a
/// coordinator that has nowhere to report to.
///
/// Under [`CachePolicy::CacheAndNetwork`] the success callback can fire twice
/// for one `execute`: first with the cached (possibly stale) entity, then with
/// the fresh one.
///
/// `execute` takes `&self` and holds no lock. Concurrent runs on a shared
/// coordinator interleave their cache access and callbacks freely; scope one
/// coordinator per logical request if that matters.
pub struct FetchCoordinator<S: DataSource> {
    source: S,
    on_success: SuccessCallback<S::Entity>,
    on_error: ErrorCallback,
    config: FetchConfig,
}

impl<S: DataSource> FetchCoordinator<S> {
    /// Create a coordinator with both callbacks and the default config.
    pub fn new<OnSuccess, OnError>(source: S, on_success: OnSuccess, on_error: OnError) -> Self
    where
        OnSuccess: Fn(&S::Entity) + Send + Sync + 'static,
        OnError: Fn(NetworkError) + Send + Sync + 'static,
    {
        Self {
            source,
            on_success: Box::new(on_success),
            on_error: Box::new(on_error),
            config: FetchConfig::default(),
        }
    }

    /// Start building a coordinator around `source`.
    pub fn builder(source: S) -> CoordinatorBuilder<S> {
        CoordinatorBuilder::new(source)
    }

    /// Replace the config.
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the config.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Get the data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the configured default policy.
    pub async fn execute_default(&self) -> Result<(), CoordinatorError> {
        self.execute(self.config.default_policy).await
    }

    /// Run `policy` once.
    ///
    /// Fetch failures go to the error callback and never fail this call.
    /// A cache read or write-back failure is returned; by then the success
    /// callback may already have fired, and it is not retracted.
    pub async fn execute(&self, policy: CachePolicy) -> Result<(), CoordinatorError> {
        let span = tracing::debug_span!(
            "fetch_coordinator",
            policy = %policy,
            scope = self.config.scope_label()
        );

        async {
            match policy {
                CachePolicy::CacheOnly => self.load().await,
                CachePolicy::CacheAndNetwork => {
                    self.load().await?;
                    self.fetch(true).await
                }
                CachePolicy::NetworkOnly => self.fetch(false).await,
            }
        }
        .instrument(span)
        .await
    }

    async fn load(&self) -> Result<(), CoordinatorError> {
        let cached = self
            .source
            .load_from_db()
            .await
            .map_err(CoordinatorError::CacheRead)?;

        match cached {
            Some(entity) => {
                tracing::debug!("cache hit");
                (self.on_success)(&entity);
            }
            None => tracing::debug!("cache miss"),
        }

        Ok(())
    }

    async fn fetch(&self, write_to_db: bool) -> Result<(), CoordinatorError> {
        match self.source.fetch().await {
            NetworkResult::Success(entity) => {
                tracing::debug!(write_to_db, "fetch succeeded");
                (self.on_success)(&entity);

                if write_to_db {
                    if let Err(e) = self.source.write_to_db(&entity).await {
                        tracing::warn!(error = %e, "cache write-back failed");
                        return Err(CoordinatorError::WriteBack(e));
                    }
                    tracing::debug!("cache written");
                }
            }
            NetworkResult::Error(error) => {
                tracing::warn!(code = ?error.code(), error = %error, "fetch failed");
                (self.on_error)(error);
            }
        }

        Ok(())
    }
}

/// Builder for [`FetchCoordinator`].
///
/// `build` only exists once both callbacks have been supplied:
///
/// ```rust,ignore
/// let coordinator = FetchCoordinator::builder(source)
///     .on_success(|entity| println!("{entity:?}"))
///     .on_error(|err| eprintln!("{err}"))
///     .config(FetchConfig::new(CachePolicy::NetworkOnly))
///     .build();
/// ```
pub struct CoordinatorBuilder<S, OnSuccess = (), OnError = ()> {
    source: S,
    on_success: OnSuccess,
    on_error: OnError,
    config: FetchConfig,
}

impl<S: DataSource> CoordinatorBuilder<S> {
    /// Create a builder with no callbacks yet.
    pub fn new(source: S) -> Self {
        Self {
            source,
            on_success: (),
            on_error: (),
            config: FetchConfig::default(),
        }
    }
}

impl<S: DataSource, OnSuccess, OnError> CoordinatorBuilder<S, OnSuccess, OnError> {
    /// Set the success callback.
    pub fn on_success<F>(self, f: F) -> CoordinatorBuilder<S, F, OnError>
    where
        F: Fn(&S::Entity) + Send + Sync + 'static,
    {
        CoordinatorBuilder {
            source: self.source,
            on_success: f,
            on_error: self.on_error,
            config: self.config,
        }
    }

    /// Set the error callback.
    pub fn on_error<F>(self, f: F) -> CoordinatorBuilder<S, OnSuccess, F>
    where
        F: Fn(NetworkError) + Send + Sync + 'static,
    {
        CoordinatorBuilder {
            source: self.source,
            on_success: self.on_success,
            on_error: f,
            config: self.config,
        }
    }

    /// Set the config.
    pub fn config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }
}

impl<S, OnSuccess, OnError> CoordinatorBuilder<S, OnSuccess, OnError>
where
    S: DataSource,
    OnSuccess: Fn(&S::Entity) + Send + Sync + 'static,
    OnError: Fn(NetworkError) + Send + Sync + 'static,
{
    /// Build the coordinator.
    pub fn build(self) -> FetchCoordinator<S> {
        FetchCoordinator::new(self.source, self.on_success, self.on_error).with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct StaticSource {
        cached: Option<u32>,
        remote: u32,
    }

    #[async_trait]
    impl DataSource for StaticSource {
        type Entity = u32;

        async fn fetch(&self) -> NetworkResult<u32> {
            NetworkResult::Success(self.remote)
        }

        async fn load_from_db(&self) -> anyhow::Result<Option<u32>> {
            Ok(self.cached)
        }

        async fn write_to_db(&self, _entity: &u32) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn collecting(source: StaticSource) -> (FetchCoordinator<StaticSource>, Arc<Mutex<Vec<u32>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let coordinator = FetchCoordinator::builder(source)
            .on_success(move |v: &u32| sink.lock().unwrap().push(*v))
            .on_error(|e| panic!("unexpected error: {}", e))
            .build();
        (coordinator, seen)
    }

    // === Builder Tests ===

    #[test]
    fn test_builder_callbacks_in_any_order() {
        let coordinator = FetchCoordinator::builder(StaticSource { cached: None, remote: 1 })
            .on_error(|_| {})
            .config(FetchConfig::new(CachePolicy::NetworkOnly).with_scope("numbers"))
            .on_success(|_: &u32| {})
            .build();

        assert_eq!(coordinator.config().default_policy, CachePolicy::NetworkOnly);
        assert_eq!(coordinator.config().scope.as_deref(), Some("numbers"));
        assert_eq!(coordinator.source().remote, 1);
    }

    #[test]
    fn test_new_uses_default_config() {
        let coordinator =
            FetchCoordinator::new(StaticSource { cached: None, remote: 1 }, |_: &u32| {}, |_| {});
        assert_eq!(coordinator.config(), &FetchConfig::default());
    }

    // === Execute Tests ===

    #[tokio::test]
    async fn test_execute_default_uses_config_policy() {
        let (coordinator, seen) = collecting(StaticSource {
            cached: Some(1),
            remote: 2,
        });
        let coordinator = coordinator.with_config(FetchConfig::new(CachePolicy::CacheOnly));

        coordinator.execute_default().await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_cache_and_network_with_miss_notifies_once() {
        let (coordinator, seen) = collecting(StaticSource {
            cached: None,
            remote: 7,
        });

        coordinator.execute(CachePolicy::CacheAndNetwork).await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![7]);
    }

    #[tokio::test]
    async fn test_execute_future_is_send() {
        let (coordinator, seen) = collecting(StaticSource {
            cached: Some(3),
            remote: 4,
        });
        let coordinator = Arc::new(coordinator);

        let handle = tokio::spawn({
            let coordinator = Arc::clone(&coordinator);
            async move { coordinator.execute(CachePolicy::CacheAndNetwork).await }
        });
        handle.await.unwrap().unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![3, 4]);
    }
}
