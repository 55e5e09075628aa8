//! # Factory Client
//!
//! The public face of provisioning. `provision` either returns the recorded
//! [`Bundle`] or a [`ProvisionError`] and records nothing.

use crate::error::ProvisionError;
use crate::model::{Bundle, BundleId, ProvisionRequest};
use tracing::{debug, info, instrument};

resource_client! {
    /// Client for interacting with the Factory actor.
    Factory => Bundle
}

impl FactoryClient {
    #[instrument(skip(self))]
    pub async fn provision(&self, request: ProvisionRequest) -> Result<Bundle, ProvisionError> {
        debug!("Sending request");
        let id = self.inner.create(request).await?;
        let bundle = self.inner.get(id).await?.ok_or_else(|| {
            ProvisionError::BackendFailure(format!("{id} was recorded but cannot be read back"))
        })?;
        info!(bundle = %bundle.id, governance_unit = %bundle.governance_unit, "Provisioned");
        Ok(bundle)
    }

    #[instrument(skip(self))]
    pub async fn bundle(&self, id: BundleId) -> Result<Option<Bundle>, ProvisionError> {
        self.inner.get(id).await
    }

    /// The bundle set in id order.
    #[instrument(skip(self))]
    pub async fn bundles(&self) -> Result<Vec<Bundle>, ProvisionError> {
        let mut bundles = self.inner.list().await?;
        bundles.sort_by_key(|bundle| bundle.id);
        Ok(bundles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{Address, ComponentKind};
    use chrono::Utc;

    fn bundle(id: u64) -> Bundle {
        Bundle {
            id: BundleId(id),
            fungible_unit: Address::from_raw(id * 10 + 1),
            reward_pool: Address::from_raw(id * 10 + 2),
            governance_unit: Address::from_raw(id * 10 + 3),
            registry: Address::from_raw(id * 10 + 4),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_bundles_are_listed_in_id_order() {
        let mut mock = MockClient::<Bundle>::new();
        mock.expect_list().return_ok(vec![bundle(3), bundle(1), bundle(2)]);

        let factory = FactoryClient::new(mock.client());
        let ids: Vec<_> = factory.bundles().await.unwrap().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BundleId(1), BundleId(2), BundleId(3)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_provision_reads_back_the_bundle() {
        let mut mock = MockClient::<Bundle>::new();
        let recorded = bundle(1);
        mock.expect_create().return_ok(BundleId(1));
        mock.expect_get(BundleId(1)).return_ok(Some(recorded.clone()));

        let factory = FactoryClient::new(mock.client());
        let request = ProvisionRequest {
            fungible_unit: recorded.fungible_unit,
            reward_pool: recorded.reward_pool,
            governance_unit: recorded.governance_unit,
            registry: recorded.registry,
        };
        assert_eq!(factory.provision(request).await, Ok(recorded));
        mock.verify();
    }

    #[tokio::test]
    async fn test_provision_failure_is_passed_through() {
        let mut mock = MockClient::<Bundle>::new();
        let not_ready = ProvisionError::DependencyNotReady {
            role: ComponentKind::RewardPool,
            address: Address::from_raw(2),
        };
        mock.expect_create().return_err(not_ready.clone());

        let factory = FactoryClient::new(mock.client());
        let request = ProvisionRequest {
            fungible_unit: Address::from_raw(1),
            reward_pool: Address::from_raw(2),
            governance_unit: Address::from_raw(3),
            registry: Address::from_raw(4),
        };
        assert_eq!(factory.provision(request).await, Err(not_ready));
        mock.verify();
    }
}
