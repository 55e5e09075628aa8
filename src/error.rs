//! Crate-level provisioning errors.

use crate::framework::FrameworkError;
use crate::model::{Address, BundleId, ComponentKind};
use std::fmt;
use thiserror::Error;

/// The slot a referenced address was supplied for.
///
/// The owner is an external account, not a component, so it gets its own role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceRole {
    Owner,
    Component(ComponentKind),
}

impl fmt::Display for ReferenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceRole::Owner => f.write_str("owner"),
            ReferenceRole::Component(kind) => write!(f, "{kind}"),
        }
    }
}

impl From<ComponentKind> for ReferenceRole {
    fn from(kind: ComponentKind) -> Self {
        ReferenceRole::Component(kind)
    }
}

/// Why a component could not be created or a bundle could not be provisioned.
///
/// Every failure is reported synchronously and leaves no partial state behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProvisionError {
    /// A creation parameter is outside its domain.
    #[error("invalid config: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A referenced address is null, unknown, failed, or lacks the expected capability.
    #[error("invalid reference for {role} at {address}: {reason}")]
    InvalidReference {
        role: ReferenceRole,
        address: Address,
        reason: String,
    },

    /// The governance unit is wired to different leaves than the ones supplied.
    #[error(
        "mismatched wiring for {role}: supplied {supplied}, governance unit records {recorded}"
    )]
    MismatchedWiring {
        role: ComponentKind,
        supplied: Address,
        recorded: Address,
    },

    /// The address was issued but its component has not finished initializing.
    #[error("{role} at {address} is not initialized yet")]
    DependencyNotReady { role: ComponentKind, address: Address },

    /// The governance unit is already sanctioned by a bundle.
    #[error("governance unit {governance_unit} already provisioned as {bundle}")]
    AlreadyProvisioned {
        governance_unit: Address,
        bundle: BundleId,
    },

    #[error("backend failure: {0}")]
    BackendFailure(String),
}

impl ProvisionError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        ProvisionError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_reference(
        role: impl Into<ReferenceRole>,
        address: Address,
        reason: impl Into<String>,
    ) -> Self {
        ProvisionError::InvalidReference {
            role: role.into(),
            address,
            reason: reason.into(),
        }
    }
}

impl From<FrameworkError> for ProvisionError {
    fn from(e: FrameworkError) -> Self {
        ProvisionError::BackendFailure(e.to_string())
    }
}
