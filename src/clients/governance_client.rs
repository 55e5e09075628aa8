use crate::error::ProvisionError;
use crate::model::{Address, GovernanceConfig, GovernanceUnit, LeafReferences};
use tracing::{debug, instrument};

resource_client! {
    /// Client for interacting with the Governance actor.
    ///
    /// Validation of references and policy happens in the actor's `on_create` hook.
    Governance => GovernanceUnit
}

impl GovernanceClient {
    #[instrument(skip(self, config))]
    pub async fn init(
        &self,
        address: Address,
        config: GovernanceConfig,
    ) -> Result<Address, ProvisionError> {
        debug!(?config, "init called");
        self.inner.create_with_id(address, config).await
    }

    /// The leaves the unit at `address` is wired to, if it exists.
    #[instrument(skip(self))]
    pub async fn references(
        &self,
        address: Address,
    ) -> Result<Option<LeafReferences>, ProvisionError> {
        Ok(self.inner.get(address).await?.map(|unit| *unit.references()))
    }
}
