use crate::model::{Address, Registry};
use crate::registry_actor::{RegistryAction, RegistryActionResult, RegistryError};
use tracing::{debug, instrument};

resource_client! {
    /// Client for interacting with the Registry actor.
    Registry => Registry
}

impl RegistryClient {
    /// Initializes an empty registry at an address the ledger reserved.
    #[instrument(skip(self))]
    pub async fn init(&self, address: Address) -> Result<Address, RegistryError> {
        debug!("Sending request");
        self.inner.create_with_id(address, ()).await
    }

    #[instrument(skip(self))]
    pub async fn register(
        &self,
        registry: Address,
        key: String,
        address: Address,
    ) -> Result<(), RegistryError> {
        match self
            .inner
            .perform_action(registry, RegistryAction::Register { key, address })
            .await?
        {
            RegistryActionResult::Registered => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, registry: Address, key: String) -> Result<Address, RegistryError> {
        match self.inner.perform_action(registry, RegistryAction::Resolve(key)).await? {
            RegistryActionResult::Resolved(address) => Ok(address),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: RegistryActionResult) -> RegistryError {
    RegistryError::ActorCommunicationError(format!("unexpected reply {result:?}"))
}
