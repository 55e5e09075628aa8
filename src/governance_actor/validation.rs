//! Governance configuration checks.
//!
//! References are checked first (the owner, then the leaves through the directory),
//! then the numeric and identity domains in declaration order. The first violation
//! wins and names its field or role.

use crate::clients::Directory;
use crate::config::PolicyLimits;
use crate::error::{ProvisionError, ReferenceRole};
use crate::model::marker::{Balances, Distribution, Naming};
use crate::model::{Address, GovernanceConfig};

/// Confirms the owner is set and every leaf reference is live and supports the
/// capability its slot expects.
pub async fn check_references(
    directory: &Directory,
    config: &GovernanceConfig,
) -> Result<(), ProvisionError> {
    check_owner(config.owner)?;
    let references = &config.references;
    directory.require::<Balances>(references.fungible_unit.address()).await?;
    directory.require::<Distribution>(references.reward_pool.address()).await?;
    directory.require::<Naming>(references.registry.address()).await?;
    Ok(())
}

fn check_owner(owner: Address) -> Result<(), ProvisionError> {
    if owner.is_null() {
        return Err(ProvisionError::invalid_reference(
            ReferenceRole::Owner,
            owner,
            "owner must not be the null address",
        ));
    }
    Ok(())
}

pub fn check_domains(
    config: &GovernanceConfig,
    limits: &PolicyLimits,
) -> Result<(), ProvisionError> {
    let policy = &config.policy;
    percentage("quorum_percent", policy.quorum_percent)?;
    percentage("support_percent", policy.support_percent)?;
    duration(
        "voting_period_secs",
        policy.voting_period_secs,
        limits.max_voting_period_secs,
    )?;
    duration(
        "execution_delay_secs",
        policy.execution_delay_secs,
        limits.max_execution_delay_secs,
    )?;
    non_negative("proposal_threshold", policy.proposal_threshold)?;
    non_negative("proposal_deposit", policy.proposal_deposit)?;
    non_negative("seat_cap", config.seat_cap)?;
    // seat_cap 0 means uncapped
    if config.seat_cap > 0 && policy.proposal_threshold > config.seat_cap {
        return Err(ProvisionError::invalid_config(
            "proposal_threshold",
            format!("{} exceeds seat_cap {}", policy.proposal_threshold, config.seat_cap),
        ));
    }

    for (field, value) in config.identity.fields() {
        let len = value.chars().count();
        if len > limits.max_identity_len {
            return Err(ProvisionError::invalid_config(
                field,
                format!("{len} characters exceeds {}", limits.max_identity_len),
            ));
        }
    }
    Ok(())
}

fn percentage(field: &'static str, value: i64) -> Result<(), ProvisionError> {
    if !(0..=100).contains(&value) {
        return Err(ProvisionError::invalid_config(
            field,
            format!("{value} is outside 0..=100"),
        ));
    }
    Ok(())
}

fn duration(field: &'static str, value: i64, max: i64) -> Result<(), ProvisionError> {
    non_negative(field, value)?;
    if value > max {
        return Err(ProvisionError::invalid_config(field, format!("{value}s exceeds {max}s")));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: i64) -> Result<(), ProvisionError> {
    if value < 0 {
        return Err(ProvisionError::invalid_config(field, format!("{value} is negative")));
    }
    Ok(())
}
