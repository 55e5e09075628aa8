//! [`ActorEntity`] implementation for [`DeploymentRecord`].
//!
//! The ledger is the backend's source of truth for which addresses were issued, what
//! kind of component each one holds, and whether that component finished initializing.

use super::actions::LedgerAction;
use crate::error::ProvisionError;
use crate::framework::ActorEntity;
use crate::model::{Address, ComponentKind, DeploymentRecord, DeploymentStatus};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for DeploymentRecord {
    type Id = Address;
    type CreateParams = ComponentKind;
    type Action = LedgerAction;
    type ActionResult = DeploymentStatus;
    type Context = ();
    type Error = ProvisionError;

    fn from_create_params(address: Address, kind: ComponentKind) -> Result<Self, ProvisionError> {
        Ok(Self {
            address,
            kind,
            status: DeploymentStatus::Reserved,
        })
    }

    async fn handle_action(
        &mut self,
        action: LedgerAction,
        _ctx: &(),
    ) -> Result<DeploymentStatus, ProvisionError> {
        let next = match (&self.status, action) {
            (DeploymentStatus::Reserved | DeploymentStatus::Failed(_), LedgerAction::Begin) => {
                DeploymentStatus::Initializing
            }
            (DeploymentStatus::Initializing, LedgerAction::Complete) => DeploymentStatus::Live,
            (DeploymentStatus::Initializing, LedgerAction::Fail(reason)) => {
                DeploymentStatus::Failed(reason)
            }
            (DeploymentStatus::Live, LedgerAction::Begin) => {
                return Err(ProvisionError::BackendFailure(format!(
                    "{} at {} is already initialized",
                    self.kind, self.address
                )));
            }
            (status, action) => {
                return Err(ProvisionError::BackendFailure(format!(
                    "cannot apply {action:?} to {} at {} while {status:?}",
                    self.kind, self.address
                )));
            }
        };
        self.status = next.clone();
        Ok(next)
    }
}
