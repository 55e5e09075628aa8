use crate::framework::{ActorEntity, ResourceClient};
use async_trait::async_trait;

/// Shared read operations for resource-specific clients.
///
/// Implementors only provide [`inner`](ActorClient::inner); `get` and `list` come for
/// free and return the entity's own error type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// Fetch every entity the actor holds, in no particular order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, T::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await
    }
}
