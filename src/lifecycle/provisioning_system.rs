use crate::clients::{ActorClient, Directory, FactoryClient, GovernanceClient, LedgerClient};
use crate::config::SystemConfig;
use crate::error::ProvisionError;
use crate::factory_actor::FactoryContext;
use crate::governance_actor::GovernanceContext;
use crate::model::marker::{Balances, CapabilityMarker, Distribution, Governs, Naming};
use crate::model::{
    Address, Bundle, BundleId, ComponentKind, DeploymentRecord, GovernanceConfig, Handle,
    ProvisionRequest, RewardInit, TokenInit,
};
use tracing::{error, info, instrument, warn};

/// Initialization arguments, one variant per component kind.
#[derive(Debug, Clone)]
pub enum InitArgs {
    Registry,
    FungibleUnit(TokenInit),
    RewardPool(RewardInit),
    GovernanceUnit(GovernanceConfig),
}

impl InitArgs {
    pub fn kind(&self) -> ComponentKind {
        match self {
            InitArgs::Registry => ComponentKind::Registry,
            InitArgs::FungibleUnit(_) => ComponentKind::FungibleUnit,
            InitArgs::RewardPool(_) => ComponentKind::RewardPool,
            InitArgs::GovernanceUnit(_) => ComponentKind::GovernanceUnit,
        }
    }
}

/// Outcome of [`ProvisioningSystem::create`]: the address is issued even when
/// initialization fails, and stays in the ledger as `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub result: Result<(), ProvisionError>,
}

/// The runtime orchestrator: owns every actor and acts as the deployment backend.
///
/// `ProvisioningSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the ledger, leaf, governance and
///   factory actors
/// - **Dependency Wiring**: governance and factory actors get a [`Directory`] at `run()`
/// - **Deployment**: issuing addresses (`instantiate`) and initializing them (`init`)
///
/// # Example
///
/// ```ignore
/// let system = ProvisioningSystem::new(&SystemConfig::default());
///
/// let registry = system.deploy_registry().await?;
/// let token = system.deploy_fungible_unit(TokenInit::new("RfDAOToken", 18, "RFD")).await?;
/// // ...
/// let bundle = system.provision(request).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ProvisioningSystem {
    pub directory: Directory,
    pub governance: GovernanceClient,
    pub factory: FactoryClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ProvisioningSystem {
    /// Spawns every actor and wires them together. Must be called inside a Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let capacity = config.mailbox_capacity;

        // 1. Create actors (no dependencies yet)
        let (ledger_actor, ledger) = crate::ledger_actor::new(capacity);
        let (token_actor, tokens) = crate::token_actor::new(capacity);
        let (reward_actor, rewards) = crate::reward_actor::new(capacity);
        let (registry_actor, registries) = crate::registry_actor::new(capacity);
        let (governance_actor, governance) = crate::governance_actor::new(capacity);
        let (factory_actor, factory) = crate::factory_actor::new(capacity);

        let directory = Directory::new(ledger, tokens, rewards, registries);

        // 2. Start actors with injected context. The dependency graph is acyclic
        // (factory -> governance -> leaves, ledger), so dropping our clients shuts
        // everything down in that order.
        let handles = vec![
            tokio::spawn(ledger_actor.run(())),
            tokio::spawn(token_actor.run(())),
            tokio::spawn(reward_actor.run(())),
            tokio::spawn(registry_actor.run(())),
            tokio::spawn(governance_actor.run(GovernanceContext {
                directory: directory.clone(),
                limits: config.limits,
            })),
            tokio::spawn(factory_actor.run(FactoryContext {
                directory: directory.clone(),
                governance: governance.clone(),
            })),
        ];

        Self {
            directory,
            governance,
            factory,
            handles,
        }
    }

    /// Reserves a fresh address for a component of `kind`.
    #[instrument(skip(self))]
    pub async fn instantiate(&self, kind: ComponentKind) -> Result<Address, ProvisionError> {
        let address = self.directory.ledger().reserve(kind).await?;
        info!(%address, %kind, "Instantiated");
        Ok(address)
    }

    /// Initializes the component at a reserved address.
    ///
    /// The ledger moves to `Initializing` first, so anyone probing the address meanwhile
    /// sees `DependencyNotReady`, then to `Live` or `Failed`.
    #[instrument(skip(self, args), fields(kind = %args.kind()))]
    pub async fn init(&self, address: Address, args: InitArgs) -> Result<(), ProvisionError> {
        let record = self.directory.probe(address).await?.ok_or_else(|| {
            ProvisionError::BackendFailure(format!("{address} was never instantiated"))
        })?;
        if record.kind != args.kind() {
            return Err(ProvisionError::BackendFailure(format!(
                "{address} was instantiated as {}, not {}",
                record.kind,
                args.kind()
            )));
        }
        self.directory.ledger().begin(address).await?;

        let result = self.dispatch(address, args).await;
        record_outcome(self.directory.ledger(), address, result).await
    }

    async fn dispatch(&self, address: Address, args: InitArgs) -> Result<(), ProvisionError> {
        match args {
            InitArgs::Registry => {
                self.directory.registries().init(address).await?;
            }
            InitArgs::FungibleUnit(init) => {
                self.directory.tokens().init(address, init).await?;
            }
            InitArgs::RewardPool(init) => {
                self.directory.rewards().init(address, init).await?;
            }
            InitArgs::GovernanceUnit(config) => {
                self.governance.init(address, config).await?;
            }
        }
        Ok(())
    }

    /// `instantiate` then `init`. Fails outright only if no address could be issued.
    pub async fn create(&self, args: InitArgs) -> Result<Deployment, ProvisionError> {
        let address = self.instantiate(args.kind()).await?;
        let result = self.init(address, args).await;
        Ok(Deployment { address, result })
    }

    pub async fn deploy_registry(&self) -> Result<Handle<Naming>, ProvisionError> {
        self.deploy(InitArgs::Registry).await
    }

    pub async fn deploy_fungible_unit(
        &self,
        init: TokenInit,
    ) -> Result<Handle<Balances>, ProvisionError> {
        self.deploy(InitArgs::FungibleUnit(init)).await
    }

    pub async fn deploy_reward_pool(
        &self,
        init: RewardInit,
    ) -> Result<Handle<Distribution>, ProvisionError> {
        self.deploy(InitArgs::RewardPool(init)).await
    }

    pub async fn deploy_governance_unit(
        &self,
        config: GovernanceConfig,
    ) -> Result<Handle<Governs>, ProvisionError> {
        self.deploy(InitArgs::GovernanceUnit(config)).await
    }

    async fn deploy<C: CapabilityMarker>(
        &self,
        args: InitArgs,
    ) -> Result<Handle<C>, ProvisionError> {
        let deployment = self.create(args).await?;
        deployment.result?;
        Ok(Handle::claim(deployment.address))
    }

    pub async fn provision(&self, request: ProvisionRequest) -> Result<Bundle, ProvisionError> {
        self.factory.provision(request).await
    }

    pub async fn bundle(&self, id: BundleId) -> Result<Option<Bundle>, ProvisionError> {
        self.factory.bundle(id).await
    }

    pub async fn bundles(&self) -> Result<Vec<Bundle>, ProvisionError> {
        self.factory.bundles().await
    }

    /// Every address the ledger has issued, with its kind and status.
    pub async fn deployments(&self) -> Result<Vec<DeploymentRecord>, ProvisionError> {
        let mut records = self.directory.ledger().list().await?;
        records.sort_by_key(|record| record.address);
        Ok(records)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the factory's mailbox; the factory drops its context,
    /// which closes the governance mailbox, and so on down to the leaves and the ledger.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.factory);
        drop(self.governance);
        drop(self.directory);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// Moves `address` out of `Initializing` according to how initialization went.
///
/// A ledger that cannot record the outcome leaves the address stuck in `Initializing`,
/// so that is logged loudly with the address.
async fn record_outcome(
    ledger: &LedgerClient,
    address: Address,
    result: Result<(), ProvisionError>,
) -> Result<(), ProvisionError> {
    match &result {
        Ok(()) => {
            if let Err(ledger_error) = ledger.complete(address).await {
                error!(%address, error = %ledger_error, "Could not record completion");
                return Err(ledger_error);
            }
            info!(%address, "Live");
        }
        Err(e) => {
            warn!(%address, error = %e, "Initialization failed");
            if let Err(ledger_error) = ledger.fail(address, e.to_string()).await {
                error!(%address, error = %ledger_error, "Could not record failure");
            }
        }
    }
    result
}
