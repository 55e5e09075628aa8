//! Error types for the Reward Pool actor.

use crate::error::ProvisionError;
use crate::framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RewardError {
    /// Initialization was rejected.
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error("Reward pool not found: {0}")]
    NotFound(String),

    /// Distributing would push `distributed` past the fixed total supply.
    #[error("Allocation exceeded: requested {requested}, remaining {remaining}")]
    AllocationExceeded { requested: u128, remaining: u128 },

    #[error("Cannot distribute to the null address")]
    NullAccount,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RewardError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => RewardError::NotFound(id),
            other => RewardError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<RewardError> for ProvisionError {
    fn from(e: RewardError) -> Self {
        match e {
            RewardError::Provision(inner) => inner,
            other => ProvisionError::BackendFailure(other.to_string()),
        }
    }
}
