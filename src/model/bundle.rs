use crate::model::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Factory-assigned identifier of a [`Bundle`]. Assigned in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BundleId(pub u64);

impl From<u64> for BundleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for BundleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bundle_{}", self.0)
    }
}

/// A sanctioned, fully linked group of four components.
///
/// Only ever constructed by the factory actor, and only committed after every
/// address was confirmed live and the governance unit's wiring matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: BundleId,
    pub fungible_unit: Address,
    pub reward_pool: Address,
    pub governance_unit: Address,
    pub registry: Address,
    pub created_at: DateTime<Utc>,
}

impl Bundle {
    /// The four member addresses: fungible unit, reward pool, governance unit, registry.
    pub fn addresses(&self) -> [Address; 4] {
        [self.fungible_unit, self.reward_pool, self.governance_unit, self.registry]
    }
}

/// Payload for `provision`: the four addresses as the caller supplied them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionRequest {
    pub fungible_unit: Address,
    pub reward_pool: Address,
    pub governance_unit: Address,
    pub registry: Address,
}
