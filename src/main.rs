//! Deploys one DAO end to end and prints its bundle.
//!
//! Reads `dao-factory.toml` from the working directory if present.

use dao_factory::config::SystemConfig;
use dao_factory::lifecycle::{
    setup_tracing, DeploymentPlan, ProvisionedDao, ProvisioningPipeline, ProvisioningSystem,
};
use dao_factory::model::{Address, GovernanceSettings, RewardInit, TokenInit};
use dao_factory::ProvisionError;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::load("dao-factory.toml").map_err(|e| e.to_string())?;
    info!(mailbox_capacity = config.mailbox_capacity, "Starting provisioning system");
    let system = ProvisioningSystem::new(&config);

    let plan = DeploymentPlan {
        token: TokenInit::new("RfDAOToken", 18, "RFD"),
        reward: RewardInit::new("RfDAOReward", "RFDR", 10_000_000_000),
        governance: GovernanceSettings::default(),
        // an external account, far outside the range the ledger issues from
        owner: Address::from_raw(u64::MAX),
    };

    let span = tracing::info_span!("dao_provisioning");
    let outcome = async {
        info!("Deploying leaves, governance unit and bundle");
        ProvisioningPipeline::new(&system).run(plan).await
    }
    .instrument(span)
    .await;

    let reported = report(outcome);
    // shut down even when provisioning failed, then surface the failure
    system.shutdown().await?;
    reported?;

    info!("Application completed successfully");
    Ok(())
}

/// Prints the provisioned bundle as JSON, or turns the failure into the exit error.
fn report(outcome: Result<ProvisionedDao, ProvisionError>) -> Result<(), String> {
    match outcome {
        Ok(dao) => {
            let json = serde_json::to_string_pretty(&dao.bundle).map_err(|e| e.to_string())?;
            println!("{json}");
            info!(bundle = %dao.bundle.id, "DAO provisioned successfully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "DAO provisioning failed");
            Err(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_provisioning_is_an_error_exit() {
        let failure = ProvisionError::invalid_config("quorum_percent", "101 is outside 0..=100");
        assert_eq!(report(Err(failure.clone())), Err(failure.to_string()));
    }
}
