//! # ActorClient Trait
//!
//! Common interface for resource-specific client wrappers. Provides default
//! implementations of the plain storage operations on top of the generic
//! [`ResourceClient`], so a wrapper only writes the methods with
//! domain-specific payloads or error handling.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard table operations.
///
/// Implementors supply the inner generic client and a mapping from
/// [`FrameworkError`] to the domain error; `get`, `find_by_name`, `list`,
/// `delete` and `delete_all` come for free.
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
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity by its unique name.
    #[tracing::instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .find_by_name(name)
            .await
            .map_err(Self::map_error)
    }

    /// Fetch every entity in the table.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Drop every entity in the table.
    #[tracing::instrument(skip(self))]
    async fn delete_all(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete_all().await.map_err(Self::map_error)
    }
}
