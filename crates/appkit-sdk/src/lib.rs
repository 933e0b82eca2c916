//! # appkit SDK
//!
//! Helpers that cut boilerplate out of an application's data layer:
//!
//! - **Outcomes**: [`NetworkResult`](outcome::NetworkResult) instead of errors crossing the view boundary
//! - **Safe calls**: [`safe_call`](outcome::safe_call) turns transport errors and panics into outcomes
//! - **Cache policies**: [`FetchCoordinator`](data::FetchCoordinator) serves cache, network, or both
//! - **One-shot events**: [`OneShot`](outcome::OneShot) for notifications that must not replay
//! - **Sessions**: [`SessionStore`](session::SessionStore) contract for token storage
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use appkit_sdk::prelude::*;
//!
//! struct ArticleRepository { api: Api, db: Db }
//!
//! #[async_trait]
//! impl DataSource for ArticleRepository {
//!     type Entity = Vec<Article>;
//!
//!     async fn fetch(&self) -> NetworkResult<Vec<Article>> {
//!         safe_call_async(async { Ok(NetworkResult::Success(self.api.articles().await?)) }).await
//!     }
//!
//!     async fn load_from_db(&self) -> anyhow::Result<Option<Vec<Article>>> {
//!         self.db.articles().await
//!     }
//!
//!     async fn write_to_db(&self, articles: &Vec<Article>) -> anyhow::Result<()> {
//!         self.db.replace_articles(articles).await
//!     }
//! }
//!
//! let coordinator = FetchCoordinator::builder(repository)
//!     .on_success(move |articles| view.show(articles))
//!     .on_error(move |err| view.notify(OneShot::new(err.to_string())))
//!     .build();
//!
//! coordinator.execute(CachePolicy::CacheAndNetwork).await?;
//! ```
//!
//! No subscriber is installed by any appkit crate; events are emitted with
//! `tracing` and routed by whatever subscriber the host sets up.

pub mod prelude;

// Re-export member crates
pub use appkit_core as outcome;
pub use appkit_data as data;
pub use appkit_session as session;
