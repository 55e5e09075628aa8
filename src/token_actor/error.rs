//! Error types for the Fungible Unit actor.

use crate::error::ProvisionError;
use crate::framework::FrameworkError;
use crate::model::Address;
use thiserror::Error;

/// Errors that can occur during token operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TokenError {
    /// Initialization was rejected.
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    /// The requested fungible unit was not found.
    #[error("Fungible unit not found: {0}")]
    NotFound(String),

    #[error("Insufficient balance for {holder}: requested {requested}, available {available}")]
    InsufficientBalance {
        holder: Address,
        requested: u128,
        available: u128,
    },

    /// A mint or transfer would overflow a balance or the total supply.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("The null address cannot hold a balance")]
    NullAccount,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for TokenError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => TokenError::NotFound(id),
            other => TokenError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<TokenError> for ProvisionError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Provision(inner) => inner,
            other => ProvisionError::BackendFailure(other.to_string()),
        }
    }
}
