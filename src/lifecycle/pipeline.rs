//! Dependency-ordered deployment of a whole DAO.
//!
//! ```text
//!   registry ─┐
//!   token ────┼─► governance unit ─► provision
//!   reward ───┘
//! ```
//!
//! The three leaves are deployed concurrently. The governance unit is deployed only
//! after all three are live, using the handles they returned, and the factory is asked
//! last.

use crate::error::ProvisionError;
use crate::lifecycle::ProvisioningSystem;
use crate::model::marker::Governs;
use crate::model::{
    Address, Bundle, GovernanceSettings, Handle, LeafReferences, ProvisionRequest, RewardInit,
    TokenInit,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Everything needed to deploy one DAO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    pub token: TokenInit,
    pub reward: RewardInit,
    pub governance: GovernanceSettings,
    pub owner: Address,
}

/// Result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedDao {
    pub leaves: LeafReferences,
    pub governance_unit: Handle<Governs>,
    pub bundle: Bundle,
}

pub struct ProvisioningPipeline<'a> {
    system: &'a ProvisioningSystem,
}

impl<'a> ProvisioningPipeline<'a> {
    pub fn new(system: &'a ProvisioningSystem) -> Self {
        Self { system }
    }

    #[instrument(skip(self, plan), fields(owner = %plan.owner))]
    pub async fn run(&self, plan: DeploymentPlan) -> Result<ProvisionedDao, ProvisionError> {
        let (registry, fungible_unit, reward_pool) = tokio::join!(
            self.system.deploy_registry(),
            self.system.deploy_fungible_unit(plan.token),
            self.system.deploy_reward_pool(plan.reward),
        );
        // join point: every leaf must be live before governance is attempted
        let leaves = LeafReferences {
            fungible_unit: fungible_unit?,
            reward_pool: reward_pool?,
            registry: registry?,
        };
        info!(
            fungible_unit = %leaves.fungible_unit,
            reward_pool = %leaves.reward_pool,
            registry = %leaves.registry,
            "Leaves live"
        );

        let governance_unit = self
            .system
            .deploy_governance_unit(plan.governance.into_config(plan.owner, leaves))
            .await?;

        let bundle = self
            .system
            .provision(ProvisionRequest {
                fungible_unit: leaves.fungible_unit.address(),
                reward_pool: leaves.reward_pool.address(),
                governance_unit: governance_unit.address(),
                registry: leaves.registry.address(),
            })
            .await?;

        Ok(ProvisionedDao {
            leaves,
            governance_unit,
            bundle,
        })
    }
}
