//! Governance unit configuration.
//!
//! The unit is configured through one named record instead of a long positional list,
//! so a quorum can never land in the voting-period slot by accident.

use crate::model::marker::{Balances, Distribution, Naming};
use crate::model::{Address, Handle};
use serde::{Deserialize, Serialize};

/// Free-text identity of the DAO. Empty strings are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityFields {
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub website: String,
    pub social_handle: String,
    pub domain: String,
}

impl IdentityFields {
    /// Field name / value pairs, in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
            ("category", self.category.as_str()),
            ("image_url", self.image_url.as_str()),
            ("website", self.website.as_str()),
            ("social_handle", self.social_handle.as_str()),
            ("domain", self.domain.as_str()),
        ]
    }
}

/// Numeric policy parameters.
///
/// Signed on purpose: a negative input is representable and gets rejected by
/// validation instead of wrapping into a huge unsigned value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyParams {
    /// Share of seats that must vote, in percent.
    pub quorum_percent: i64,
    /// Share of cast votes that must approve, in percent.
    pub support_percent: i64,
    pub voting_period_secs: i64,
    pub execution_delay_secs: i64,
    /// Seats required to open a proposal.
    pub proposal_threshold: i64,
    pub proposal_deposit: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFlags {
    pub public_membership: bool,
    pub token_gated: bool,
}

/// The three leaves a governance unit is wired to. Immutable once the unit exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafReferences {
    pub fungible_unit: Handle<Balances>,
    pub reward_pool: Handle<Distribution>,
    pub registry: Handle<Naming>,
}

/// Everything about a governance unit except who owns it and what it is wired to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceSettings {
    pub identity: IdentityFields,
    pub policy: PolicyParams,
    pub flags: PolicyFlags,
    /// Membership cap; 0 means uncapped.
    pub seat_cap: i64,
}

impl GovernanceSettings {
    pub fn into_config(self, owner: Address, references: LeafReferences) -> GovernanceConfig {
        GovernanceConfig {
            identity: self.identity,
            policy: self.policy,
            flags: self.flags,
            seat_cap: self.seat_cap,
            owner,
            references,
        }
    }
}

/// Full creation payload for a governance unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernanceConfig {
    pub identity: IdentityFields,
    pub policy: PolicyParams,
    pub flags: PolicyFlags,
    pub seat_cap: i64,
    pub owner: Address,
    pub references: LeafReferences,
}

/// A committed governance unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernanceUnit {
    pub address: Address,
    pub config: GovernanceConfig,
}

impl GovernanceUnit {
    pub fn references(&self) -> &LeafReferences {
        &self.config.references
    }
}
