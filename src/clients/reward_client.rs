use crate::model::{Address, RewardInit, RewardPool};
use crate::reward_actor::{RewardAction, RewardActionResult, RewardError};
use tracing::{debug, instrument};

resource_client! {
    /// Client for interacting with the Reward Pool actor.
    Reward => RewardPool
}

impl RewardClient {
    /// Initializes a reward pool at an address the ledger reserved.
    #[instrument(skip(self))]
    pub async fn init(&self, address: Address, init: RewardInit) -> Result<Address, RewardError> {
        debug!("Sending request");
        self.inner.create_with_id(address, init).await
    }

    /// Allocates `amount` to `to` and returns what is left in the pool.
    #[instrument(skip(self))]
    pub async fn distribute(
        &self,
        pool: Address,
        to: Address,
        amount: u128,
    ) -> Result<u128, RewardError> {
        match self.inner.perform_action(pool, RewardAction::Distribute { to, amount }).await? {
            RewardActionResult::Remaining(remaining) => Ok(remaining),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remaining(&self, pool: Address) -> Result<u128, RewardError> {
        match self.inner.perform_action(pool, RewardAction::Remaining).await? {
            RewardActionResult::Remaining(remaining) => Ok(remaining),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn allocation_of(&self, pool: Address, holder: Address) -> Result<u128, RewardError> {
        match self.inner.perform_action(pool, RewardAction::AllocationOf(holder)).await? {
            RewardActionResult::Allocation(amount) => Ok(amount),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: RewardActionResult) -> RewardError {
    RewardError::ActorCommunicationError(format!("unexpected reply {result:?}"))
}
