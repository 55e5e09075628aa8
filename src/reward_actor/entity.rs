//! [`ActorEntity`] implementation for [`RewardPool`].

use super::actions::{RewardAction, RewardActionResult};
use super::error::RewardError;
use crate::error::ProvisionError;
use crate::framework::ActorEntity;
use crate::model::{Address, RewardInit, RewardPool};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for RewardPool {
    type Id = Address;
    type CreateParams = RewardInit;
    type Action = RewardAction;
    type ActionResult = RewardActionResult;
    type Context = ();
    type Error = RewardError;

    /// The total supply is fixed here for the life of the pool.
    fn from_create_params(address: Address, params: RewardInit) -> Result<Self, RewardError> {
        if params.name.is_empty() {
            return Err(ProvisionError::invalid_config("name", "must not be empty").into());
        }
        if params.symbol.is_empty() {
            return Err(ProvisionError::invalid_config("symbol", "must not be empty").into());
        }
        Ok(Self::new(address, params.name, params.symbol, params.total_supply))
    }

    async fn handle_action(
        &mut self,
        action: RewardAction,
        _ctx: &(),
    ) -> Result<RewardActionResult, RewardError> {
        match action {
            RewardAction::Distribute { to, amount } => {
                if to.is_null() {
                    return Err(RewardError::NullAccount);
                }
                let remaining = self.remaining();
                if amount > remaining {
                    return Err(RewardError::AllocationExceeded {
                        requested: amount,
                        remaining,
                    });
                }
                self.distributed += amount;
                *self.allocations.entry(to).or_default() += amount;
                Ok(RewardActionResult::Remaining(self.remaining()))
            }
            RewardAction::Remaining => Ok(RewardActionResult::Remaining(self.remaining())),
            RewardAction::AllocationOf(holder) => {
                Ok(RewardActionResult::Allocation(self.allocation_of(holder)))
            }
        }
    }
}
