//! # Token Client
//!
//! High-level API for the Fungible Unit actor.

use crate::model::{Address, FungibleUnit, TokenInit};
use crate::token_actor::{TokenAction, TokenActionResult, TokenError};
use tracing::{debug, instrument};

resource_client! {
    /// Client for interacting with the Fungible Unit actor.
    Token => FungibleUnit
}

impl TokenClient {
    /// Initializes a fungible unit at an address the ledger reserved.
    #[instrument(skip(self))]
    pub async fn init(&self, address: Address, init: TokenInit) -> Result<Address, TokenError> {
        debug!("Sending request");
        self.inner.create_with_id(address, init).await
    }

    /// Mints `amount` to `to` and returns the holder's new balance.
    #[instrument(skip(self))]
    pub async fn mint(&self, unit: Address, to: Address, amount: u128) -> Result<u128, TokenError> {
        match self.inner.perform_action(unit, TokenAction::Mint { to, amount }).await? {
            TokenActionResult::Balance(balance) => Ok(balance),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn transfer(
        &self,
        unit: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), TokenError> {
        match self
            .inner
            .perform_action(unit, TokenAction::Transfer { from, to, amount })
            .await?
        {
            TokenActionResult::Transferred => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn balance_of(&self, unit: Address, holder: Address) -> Result<u128, TokenError> {
        match self.inner.perform_action(unit, TokenAction::BalanceOf(holder)).await? {
            TokenActionResult::Balance(balance) => Ok(balance),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn total_supply(&self, unit: Address) -> Result<u128, TokenError> {
        match self.inner.perform_action(unit, TokenAction::TotalSupply).await? {
            TokenActionResult::TotalSupply(supply) => Ok(supply),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: TokenActionResult) -> TokenError {
    TokenError::ActorCommunicationError(format!("unexpected reply {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn test_transfer_surfaces_insufficient_balance() {
        let unit = Address::from_raw(2);
        let alice = Address::from_raw(10);
        let mut mock = MockClient::<FungibleUnit>::new();
        mock.expect_action(unit).return_err(TokenError::InsufficientBalance {
            holder: alice,
            requested: 10,
            available: 3,
        });

        let tokens = TokenClient::new(mock.client());
        let err = tokens.transfer(unit, alice, Address::from_raw(11), 10).await.unwrap_err();
        assert!(matches!(err, TokenError::InsufficientBalance { available: 3, .. }));
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_unit_maps_to_not_found() {
        let tokens = TokenClient::new(MockClient::<FungibleUnit>::new().client());
        // no expectation queued: the mock answers NotFound
        let err = tokens.total_supply(Address::from_raw(8)).await.unwrap_err();
        assert!(matches!(err, TokenError::NotFound(_)));
    }
}
