//! Balance operations on a [`FungibleUnit`](crate::model::FungibleUnit).
//!
//! Handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::Address;

#[derive(Debug, Clone)]
pub enum TokenAction {
    /// Credits `amount` to `to`, growing the total supply.
    Mint { to: Address, amount: u128 },
    /// Moves `amount` from one holder to another.
    ///
    /// # Errors
    /// Fails with `InsufficientBalance` if `from` holds less than `amount`.
    Transfer {
        from: Address,
        to: Address,
        amount: u128,
    },
    BalanceOf(Address),
    TotalSupply,
}

/// Results from [`TokenAction`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenActionResult {
    /// Balance of the holder named by `Mint` or `BalanceOf`, after the action.
    Balance(u128),
    Transferred,
    TotalSupply(u128),
}
