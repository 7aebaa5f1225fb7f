//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default `fetch` and
//! `count` methods built on top of a generic `ResourceClient`.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// Implementors only supply access to the inner client and an error mapping; `fetch` and
/// `count` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Count entities matching a query.
    #[tracing::instrument(skip(self))]
    async fn count(&self, query: T::Query) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count(query).await.map_err(Self::map_error)
    }
}
