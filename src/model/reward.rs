use crate::model::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A capped-supply incentive store.
///
/// `total_supply` is fixed at creation; `distributed` never exceeds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardPool {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub total_supply: u128,
    pub distributed: u128,
    pub allocations: HashMap<Address, u128>,
}

impl RewardPool {
    pub fn new(
        address: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
        total_supply: u128,
    ) -> Self {
        Self {
            address,
            name: name.into(),
            symbol: symbol.into(),
            total_supply,
            distributed: 0,
            allocations: HashMap::new(),
        }
    }

    pub fn remaining(&self) -> u128 {
        self.total_supply - self.distributed
    }

    pub fn allocation_of(&self, holder: Address) -> u128 {
        self.allocations.get(&holder).copied().unwrap_or(0)
    }
}

/// Payload for initializing a reward pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardInit {
    pub name: String,
    pub symbol: String,
    pub total_supply: u128,
}

impl RewardInit {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, total_supply: u128) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            total_supply,
        }
    }
}
