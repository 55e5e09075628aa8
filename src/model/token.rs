use crate::model::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Largest decimal precision a `u128` balance can represent (10^38 < 2^128).
pub const MAX_DECIMALS: u8 = 38;

/// A balance-tracking unit.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for FungibleUnit`](#impl-ActorEntity-for-FungibleUnit) for details on:
/// - Creation parameters ([`TokenInit`])
/// - Custom actions ([`TokenAction`](crate::token_actor::TokenAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FungibleUnit {
    pub address: Address,
    pub name: String,
    pub decimals: u8,
    pub symbol: String,
    pub balances: HashMap<Address, u128>,
    pub total_supply: u128,
}

impl FungibleUnit {
    pub fn new(
        address: Address,
        name: impl Into<String>,
        decimals: u8,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            address,
            name: name.into(),
            decimals,
            symbol: symbol.into(),
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    pub fn balance_of(&self, holder: Address) -> u128 {
        self.balances.get(&holder).copied().unwrap_or(0)
    }
}

/// Payload for initializing a fungible unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInit {
    pub name: String,
    pub decimals: u8,
    pub symbol: String,
}

impl TokenInit {
    pub fn new(name: impl Into<String>, decimals: u8, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decimals,
            symbol: symbol.into(),
        }
    }
}
