//! Capability probing.
//!
//! [`Directory`] answers "what is at this address, and can I use it as a `C`?" by asking
//! the ledger for the address's kind and status and then the owning actor for the
//! component itself. Both the governance and the factory actors carry one in their
//! context.

use crate::clients::{ActorClient, LedgerClient, RegistryClient, RewardClient, TokenClient};
use crate::error::ProvisionError;
use crate::model::marker::CapabilityMarker;
use crate::model::{Address, ComponentKind, DeploymentRecord, DeploymentStatus, Handle};
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct Directory {
    ledger: LedgerClient,
    tokens: TokenClient,
    rewards: RewardClient,
    registries: RegistryClient,
}

impl Directory {
    pub fn new(
        ledger: LedgerClient,
        tokens: TokenClient,
        rewards: RewardClient,
        registries: RegistryClient,
    ) -> Self {
        Self {
            ledger,
            tokens,
            rewards,
            registries,
        }
    }

    pub fn ledger(&self) -> &LedgerClient {
        &self.ledger
    }

    pub fn tokens(&self) -> &TokenClient {
        &self.tokens
    }

    pub fn rewards(&self) -> &RewardClient {
        &self.rewards
    }

    pub fn registries(&self) -> &RegistryClient {
        &self.registries
    }

    /// The ledger's view of `address`, or `None` if it was never issued.
    #[instrument(skip(self))]
    pub async fn probe(
        &self,
        address: Address,
    ) -> Result<Option<DeploymentRecord>, ProvisionError> {
        if address.is_null() {
            return Ok(None);
        }
        self.ledger.record(address).await
    }

    /// Confirms that `address` holds a live component supporting `C`.
    ///
    /// Rejections:
    /// - null, never issued, failed initialization, or wrong capability: `InvalidReference`
    /// - right capability, initialization not finished: `DependencyNotReady`
    #[instrument(skip(self), fields(capability = %C::CAPABILITY))]
    pub async fn require<C: CapabilityMarker>(
        &self,
        address: Address,
    ) -> Result<Handle<C>, ProvisionError> {
        let role = C::CAPABILITY.provider();
        let Some(record) = self.probe(address).await? else {
            let reason = if address.is_null() {
                "null address"
            } else {
                "no component at this address"
            };
            warn!(%address, reason, "Reference rejected");
            return Err(ProvisionError::invalid_reference(role, address, reason));
        };

        if !record.kind.supports(C::CAPABILITY) {
            warn!(%address, kind = %record.kind, "Capability mismatch");
            return Err(ProvisionError::invalid_reference(
                role,
                address,
                format!("{} does not provide {}", record.kind, C::CAPABILITY),
            ));
        }

        if record.status.is_pending() {
            warn!(%address, status = ?record.status, "Dependency not ready");
            return Err(ProvisionError::DependencyNotReady { role, address });
        }
        if let DeploymentStatus::Failed(reason) = &record.status {
            warn!(%address, %reason, "Dependency failed to initialize");
            return Err(ProvisionError::invalid_reference(
                role,
                address,
                format!("initialization failed: {reason}"),
            ));
        }

        self.confirm(record.kind, address).await?;
        debug!(%address, "Reference confirmed");
        Ok(Handle::claim(address))
    }

    /// Asks the owning actor for the component the ledger says is live.
    async fn confirm(&self, kind: ComponentKind, address: Address) -> Result<(), ProvisionError> {
        let present = match kind {
            ComponentKind::Registry => self.registries.get(address).await?.is_some(),
            ComponentKind::FungibleUnit => self.tokens.get(address).await?.is_some(),
            ComponentKind::RewardPool => self.rewards.get(address).await?.is_some(),
            // Consumers of a governance unit fetch it themselves.
            ComponentKind::GovernanceUnit => true,
        };
        if present {
            Ok(())
        } else {
            Err(ProvisionError::BackendFailure(format!(
                "ledger lists {kind} at {address} as live but its actor does not hold it"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceRole;
    use crate::framework::mock::MockClient;
    use crate::model::marker::{Balances, Distribution, Naming};
    use crate::model::{FungibleUnit, Registry, RewardPool};

    struct Mocks {
        ledger: MockClient<DeploymentRecord>,
        tokens: MockClient<FungibleUnit>,
        rewards: MockClient<RewardPool>,
        registries: MockClient<Registry>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                ledger: MockClient::new(),
                tokens: MockClient::new(),
                rewards: MockClient::new(),
                registries: MockClient::new(),
            }
        }

        fn directory(&self) -> Directory {
            Directory::new(
                LedgerClient::new(self.ledger.client()),
                TokenClient::new(self.tokens.client()),
                RewardClient::new(self.rewards.client()),
                RegistryClient::new(self.registries.client()),
            )
        }

        fn verify(&self) {
            self.ledger.verify();
            self.tokens.verify();
            self.rewards.verify();
            self.registries.verify();
        }
    }

    fn record(address: Address, kind: ComponentKind, status: DeploymentStatus) -> DeploymentRecord {
        DeploymentRecord { address, kind, status }
    }

    #[tokio::test]
    async fn test_live_component_is_confirmed() {
        let address = Address::from_raw(1);
        let mut mocks = Mocks::new();
        mocks
            .ledger
            .expect_get(address)
            .return_ok(Some(record(
                address,
                ComponentKind::Registry,
                DeploymentStatus::Live,
            )));
        mocks.registries.expect_get(address).return_ok(Some(Registry::new(address)));

        let handle = mocks.directory().require::<Naming>(address).await.unwrap();
        assert_eq!(handle.address(), address);
        mocks.verify();
    }

    #[tokio::test]
    async fn test_null_address_never_reaches_the_ledger() {
        let mocks = Mocks::new();
        let err = mocks.directory().require::<Naming>(Address::NULL).await.unwrap_err();
        assert!(matches!(
            err,
            ProvisionError::InvalidReference {
                role: ReferenceRole::Component(ComponentKind::Registry),
                ..
            }
        ));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_wrong_capability_is_invalid_reference() {
        let address = Address::from_raw(2);
        let mut mocks = Mocks::new();
        mocks
            .ledger
            .expect_get(address)
            .return_ok(Some(record(
                address,
                ComponentKind::FungibleUnit,
                DeploymentStatus::Live,
            )));

        let err = mocks.directory().require::<Naming>(address).await.unwrap_err();
        assert!(matches!(
            err,
            ProvisionError::InvalidReference {
                role: ReferenceRole::Component(ComponentKind::Registry),
                address: a,
                ..
            } if a == address
        ));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_reserved_component_is_not_ready() {
        let address = Address::from_raw(3);
        let mut mocks = Mocks::new();
        mocks.ledger.expect_get(address).return_ok(Some(record(
            address,
            ComponentKind::FungibleUnit,
            DeploymentStatus::Reserved,
        )));

        let err = mocks.directory().require::<Balances>(address).await.unwrap_err();
        assert_eq!(
            err,
            ProvisionError::DependencyNotReady {
                role: ComponentKind::FungibleUnit,
                address,
            }
        );
        mocks.verify();
    }

    #[tokio::test]
    async fn test_initializing_component_is_not_ready() {
        let address = Address::from_raw(5);
        let mut mocks = Mocks::new();
        mocks.ledger.expect_get(address).return_ok(Some(record(
            address,
            ComponentKind::RewardPool,
            DeploymentStatus::Initializing,
        )));

        let err = mocks.directory().require::<Distribution>(address).await.unwrap_err();
        assert_eq!(
            err,
            ProvisionError::DependencyNotReady {
                role: ComponentKind::RewardPool,
                address,
            }
        );
        mocks.verify();
    }

    #[tokio::test]
    async fn test_failed_component_is_invalid_reference() {
        let address = Address::from_raw(4);
        let mut mocks = Mocks::new();
        mocks.ledger.expect_get(address).return_ok(Some(record(
            address,
            ComponentKind::FungibleUnit,
            DeploymentStatus::Failed("decimals: 40 exceeds 38".into()),
        )));

        let err = mocks.directory().require::<Balances>(address).await.unwrap_err();
        assert!(matches!(err, ProvisionError::InvalidReference { .. }));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_unknown_address_is_invalid_reference() {
        let address = Address::from_raw(99);
        let mut mocks = Mocks::new();
        mocks.ledger.expect_get(address).return_ok(None);

        let err = mocks.directory().require::<Balances>(address).await.unwrap_err();
        assert!(matches!(err, ProvisionError::InvalidReference { .. }));
        mocks.verify();
    }
}
