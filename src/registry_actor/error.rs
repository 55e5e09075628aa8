//! Error types for the Registry actor.

use crate::error::ProvisionError;
use crate::framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// Initialization was rejected.
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error("Registry not found: {0}")]
    NotFound(String),

    #[error("Name already taken: {0}")]
    NameTaken(String),

    #[error("Name not registered: {0}")]
    NameNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RegistryError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => RegistryError::NotFound(id),
            other => RegistryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<RegistryError> for ProvisionError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Provision(inner) => inner,
            other => ProvisionError::BackendFailure(other.to_string()),
        }
    }
}
