use crate::error::ProvisionError;
use crate::ledger_actor::LedgerAction;
use crate::model::{Address, ComponentKind, DeploymentRecord, DeploymentStatus};
use tracing::{debug, instrument};

resource_client! {
    /// Client for the deployment ledger.
    Ledger => DeploymentRecord
}

impl LedgerClient {
    /// Issues a fresh address for a component of `kind`, in status `Reserved`.
    #[instrument(skip(self))]
    pub async fn reserve(&self, kind: ComponentKind) -> Result<Address, ProvisionError> {
        debug!("Sending request");
        self.inner.create(kind).await
    }

    #[instrument(skip(self))]
    pub async fn record(
        &self,
        address: Address,
    ) -> Result<Option<DeploymentRecord>, ProvisionError> {
        self.inner.get(address).await
    }

    #[instrument(skip(self))]
    pub async fn begin(&self, address: Address) -> Result<DeploymentStatus, ProvisionError> {
        self.transition(address, LedgerAction::Begin).await
    }

    #[instrument(skip(self))]
    pub async fn complete(&self, address: Address) -> Result<DeploymentStatus, ProvisionError> {
        self.transition(address, LedgerAction::Complete).await
    }

    #[instrument(skip(self))]
    pub async fn fail(
        &self,
        address: Address,
        reason: String,
    ) -> Result<DeploymentStatus, ProvisionError> {
        self.transition(address, LedgerAction::Fail(reason)).await
    }

    async fn transition(
        &self,
        address: Address,
        action: LedgerAction,
    ) -> Result<DeploymentStatus, ProvisionError> {
        debug!(?action, "Sending request");
        self.inner.perform_action(address, action).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_fail_carries_the_reason() {
        let (client, mut receiver) = create_mock_client::<DeploymentRecord>(10);
        let ledger = LedgerClient::new(client);
        let address = Address::from_raw(3);

        let task = tokio::spawn(async move {
            ledger.fail(address, "symbol: must not be empty".into()).await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, address);
        match action {
            LedgerAction::Fail(reason) => assert_eq!(reason, "symbol: must not be empty"),
            other => panic!("Expected Fail, got {other:?}"),
        }
        responder
            .send(Ok(DeploymentStatus::Failed("symbol: must not be empty".into())))
            .unwrap();

        assert!(matches!(task.await.unwrap(), Ok(DeploymentStatus::Failed(_))));
    }
}
