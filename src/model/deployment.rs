use crate::model::{Address, ComponentKind};
use serde::{Deserialize, Serialize};

/// Lifecycle of an issued address.
///
/// `Reserved -> Initializing -> Live`, or `Initializing -> Failed`. A failed address may
/// be initialized again; a live one may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum DeploymentStatus {
    Reserved,
    Initializing,
    Live,
    Failed(String),
}

impl DeploymentStatus {
    /// True while the component at this address may still come alive.
    pub fn is_pending(&self) -> bool {
        matches!(self, DeploymentStatus::Reserved | DeploymentStatus::Initializing)
    }
}

/// Ledger row for one issued address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub address: Address,
    pub kind: ComponentKind,
    pub status: DeploymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_reserved_and_initializing_are_pending() {
        assert!(DeploymentStatus::Reserved.is_pending());
        assert!(DeploymentStatus::Initializing.is_pending());
        assert!(!DeploymentStatus::Live.is_pending());
        assert!(!DeploymentStatus::Failed("boom".into()).is_pending());
    }
}
