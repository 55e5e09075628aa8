//! [`ActorEntity`] implementation for [`FungibleUnit`].
//!
//! Balances are `u128`; every mutation is checked so that the sum of balances always
//! equals `total_supply`.

use super::actions::{TokenAction, TokenActionResult};
use super::error::TokenError;
use crate::error::ProvisionError;
use crate::framework::ActorEntity;
use crate::model::{Address, FungibleUnit, TokenInit, MAX_DECIMALS};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for FungibleUnit {
    type Id = Address;
    type CreateParams = TokenInit;
    type Action = TokenAction;
    type ActionResult = TokenActionResult;
    type Context = ();
    type Error = TokenError;

    fn from_create_params(address: Address, params: TokenInit) -> Result<Self, TokenError> {
        if params.name.is_empty() {
            return Err(ProvisionError::invalid_config("name", "must not be empty").into());
        }
        if params.symbol.is_empty() {
            return Err(ProvisionError::invalid_config("symbol", "must not be empty").into());
        }
        if params.decimals > MAX_DECIMALS {
            return Err(ProvisionError::invalid_config(
                "decimals",
                format!("{} exceeds {MAX_DECIMALS}", params.decimals),
            )
            .into());
        }
        Ok(Self::new(address, params.name, params.decimals, params.symbol))
    }

    async fn handle_action(
        &mut self,
        action: TokenAction,
        _ctx: &(),
    ) -> Result<TokenActionResult, TokenError> {
        match action {
            TokenAction::Mint { to, amount } => {
                if to.is_null() {
                    return Err(TokenError::NullAccount);
                }
                let supply = self
                    .total_supply
                    .checked_add(amount)
                    .ok_or_else(|| {
                        TokenError::Overflow(format!("minting {amount} overflows total supply"))
                    })?;
                // A balance never exceeds the supply, so it cannot overflow once the supply didn't.
                let balance = self.balance_of(to) + amount;
                self.total_supply = supply;
                self.balances.insert(to, balance);
                Ok(TokenActionResult::Balance(balance))
            }
            TokenAction::Transfer { from, to, amount } => {
                if to.is_null() {
                    return Err(TokenError::NullAccount);
                }
                let available = self.balance_of(from);
                if available < amount {
                    return Err(TokenError::InsufficientBalance {
                        holder: from,
                        requested: amount,
                        available,
                    });
                }
                self.balances.insert(from, available - amount);
                let credited = self.balance_of(to) + amount;
                self.balances.insert(to, credited);
                Ok(TokenActionResult::Transferred)
            }
            TokenAction::BalanceOf(holder) => {
                Ok(TokenActionResult::Balance(self.balance_of(holder)))
            }
            TokenAction::TotalSupply => Ok(TokenActionResult::TotalSupply(self.total_supply)),
        }
    }
}
