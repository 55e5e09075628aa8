//! [`ActorEntity`] implementation for [`GovernanceUnit`].
//!
//! A governance unit has no operations after creation: its configuration and its leaf
//! references are fixed. All the work happens in `on_create`, which either commits a
//! fully validated unit or nothing.

use super::validation;
use super::GovernanceContext;
use crate::error::ProvisionError;
use crate::framework::ActorEntity;
use crate::model::{Address, GovernanceConfig, GovernanceUnit};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for GovernanceUnit {
    type Id = Address;
    type CreateParams = GovernanceConfig;
    type Action = Infallible;
    type ActionResult = ();
    type Context = GovernanceContext;
    type Error = ProvisionError;

    fn from_create_params(
        address: Address,
        config: GovernanceConfig,
    ) -> Result<Self, ProvisionError> {
        Ok(Self { address, config })
    }

    async fn on_create(&mut self, ctx: &GovernanceContext) -> Result<(), ProvisionError> {
        validation::check_references(&ctx.directory, &self.config).await?;
        validation::check_domains(&self.config, &ctx.limits)
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &GovernanceContext,
    ) -> Result<(), ProvisionError> {
        match action {}
    }
}
