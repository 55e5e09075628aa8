//! [`ActorEntity`] implementation for [`Bundle`].
//!
//! The factory's store *is* the bundle set. Because the actor handles one message at a
//! time, bundle ids are handed out in order and a bundle is visible only once every check
//! below has passed.

use super::FactoryContext;
use crate::error::ProvisionError;
use crate::framework::ActorEntity;
use crate::model::marker::{Balances, Distribution, Governs, Naming};
use crate::model::{Bundle, BundleId, ComponentKind, ProvisionRequest};
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for Bundle {
    type Id = BundleId;
    type CreateParams = ProvisionRequest;
    type Action = Infallible;
    type ActionResult = ();
    type Context = FactoryContext;
    type Error = ProvisionError;

    fn from_create_params(id: BundleId, request: ProvisionRequest) -> Result<Self, ProvisionError> {
        Ok(Self {
            id,
            fungible_unit: request.fungible_unit,
            reward_pool: request.reward_pool,
            governance_unit: request.governance_unit,
            registry: request.registry,
            created_at: Utc::now(),
        })
    }

    /// Checks all four components are live with the right capability, then that the
    /// governance unit is wired to exactly the three leaves supplied.
    async fn on_create(&mut self, ctx: &FactoryContext) -> Result<(), ProvisionError> {
        let directory = &ctx.directory;
        directory.require::<Balances>(self.fungible_unit).await?;
        directory.require::<Distribution>(self.reward_pool).await?;
        directory.require::<Governs>(self.governance_unit).await?;
        directory.require::<Naming>(self.registry).await?;

        let recorded = ctx.governance.references(self.governance_unit).await?.ok_or_else(|| {
            ProvisionError::BackendFailure(format!(
                "ledger lists governance unit {} as live but its actor does not hold it",
                self.governance_unit
            ))
        })?;

        let wiring = [
            (ComponentKind::FungibleUnit, self.fungible_unit, recorded.fungible_unit.address()),
            (ComponentKind::RewardPool, self.reward_pool, recorded.reward_pool.address()),
            (ComponentKind::Registry, self.registry, recorded.registry.address()),
        ];
        for (role, supplied, recorded) in wiring {
            if supplied != recorded {
                return Err(ProvisionError::MismatchedWiring {
                    role,
                    supplied,
                    recorded,
                });
            }
        }
        debug!(bundle = %self.id, "Wiring confirmed");
        Ok(())
    }

    /// A governance unit is sanctioned by at most one bundle.
    fn check_conflict(&self, existing: &Self) -> Result<(), ProvisionError> {
        if existing.governance_unit == self.governance_unit {
            return Err(ProvisionError::AlreadyProvisioned {
                governance_unit: self.governance_unit,
                bundle: existing.id,
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &FactoryContext,
    ) -> Result<(), ProvisionError> {
        match action {}
    }
}
