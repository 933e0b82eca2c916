//! The data source contract implemented by the host application.

use std::sync::Arc;

use appkit_core::NetworkResult;
use async_trait::async_trait;

/// Remote fetch plus local cache access for one kind of entity.
///
/// Implemented by the host by composing its own transport and persistence.
/// Every method is a suspension point; none of them should block a thread.
///
/// Remote failures are values (`NetworkResult::Error`), wrap fallible
/// transports with [`appkit_core::safe_call_async`]. Cache failures are
/// plain errors and propagate out of the coordinator.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// The entity relayed by this source.
    type Entity: Send + Sync + 'static;

    /// Fetch the entity from the remote source.
    async fn fetch(&self) -> NetworkResult<Self::Entity>;

    /// Read the entity from the local cache. `Ok(None)` is a cache miss.
    async fn load_from_db(&self) -> anyhow::Result<Option<Self::Entity>>;

    /// Write the entity to the local cache.
    async fn write_to_db(&self, entity: &Self::Entity) -> anyhow::Result<()>;
}

#[async_trait]
impl<S> DataSource for Arc<S>
where
    S: DataSource + ?Sized,
{
    type Entity = S::Entity;

    async fn fetch(&self) -> NetworkResult<Self::Entity> {
        (**self).fetch().await
    }

    async fn load_from_db(&self) -> anyhow::Result<Option<Self::Entity>> {
        (**self).load_from_db().await
    }

    async fn write_to_db(&self, entity: &Self::Entity) -> anyhow::Result<()> {
        (**self).write_to_db(entity).await
    }
}
