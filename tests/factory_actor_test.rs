use dao_factory::clients::{
    ActorClient, Directory, GovernanceClient, LedgerClient, RegistryClient, RewardClient,
    TokenClient,
};
use dao_factory::factory_actor::FactoryContext;
use dao_factory::framework::mock::MockClient;
use dao_factory::model::{
    Address, ComponentKind, DeploymentRecord, DeploymentStatus, FungibleUnit, GovernanceSettings,
    GovernanceUnit, Handle, LeafReferences, ProvisionRequest, Registry, RewardPool,
};
use dao_factory::ProvisionError;

const FUNGIBLE: Address = Address::from_raw(1);
const REWARD: Address = Address::from_raw(2);
const GOVERNANCE: Address = Address::from_raw(3);
const REGISTRY: Address = Address::from_raw(4);

/// Scripted stand-ins for every actor the factory talks to.
struct Dependencies {
    ledger: MockClient<DeploymentRecord>,
    tokens: MockClient<FungibleUnit>,
    rewards: MockClient<RewardPool>,
    registries: MockClient<Registry>,
    governance: MockClient<GovernanceUnit>,
}

impl Dependencies {
    fn new() -> Self {
        Self {
            ledger: MockClient::new(),
            tokens: MockClient::new(),
            rewards: MockClient::new(),
            registries: MockClient::new(),
            governance: MockClient::new(),
        }
    }

    fn context(&self) -> FactoryContext {
        FactoryContext {
            directory: Directory::new(
                LedgerClient::new(self.ledger.client()),
                TokenClient::new(self.tokens.client()),
                RewardClient::new(self.rewards.client()),
                RegistryClient::new(self.registries.client()),
            ),
            governance: GovernanceClient::new(self.governance.client()),
        }
    }

    fn expect_live(&mut self, address: Address, kind: ComponentKind) {
        self.expect_status(address, kind, DeploymentStatus::Live);
        match kind {
            ComponentKind::FungibleUnit => self
                .tokens
                .expect_get(address)
                .return_ok(Some(FungibleUnit::new(address, "RfDAOToken", 18, "RFD"))),
            ComponentKind::RewardPool => self
                .rewards
                .expect_get(address)
                .return_ok(Some(RewardPool::new(address, "RfDAOReward", "RFDR", 10_000_000_000))),
            ComponentKind::Registry => self
                .registries
                .expect_get(address)
                .return_ok(Some(Registry::new(address))),
            ComponentKind::GovernanceUnit => {}
        }
    }

    fn expect_status(&mut self, address: Address, kind: ComponentKind, status: DeploymentStatus) {
        self.ledger
            .expect_get(address)
            .return_ok(Some(DeploymentRecord { address, kind, status }));
    }

    fn expect_governance_wired_to(&mut self, leaves: LeafReferences) {
        let config = GovernanceSettings::default().into_config(Address::from_raw(u64::MAX), leaves);
        self.governance.expect_get(GOVERNANCE).return_ok(Some(GovernanceUnit {
            address: GOVERNANCE,
            config,
        }));
    }

    fn verify(&self) {
        self.ledger.verify();
        self.tokens.verify();
        self.rewards.verify();
        self.registries.verify();
        self.governance.verify();
    }
}

fn leaves(registry: Address) -> LeafReferences {
    LeafReferences {
        fungible_unit: Handle::claim(FUNGIBLE),
        reward_pool: Handle::claim(REWARD),
        registry: Handle::claim(registry),
    }
}

fn request() -> ProvisionRequest {
    ProvisionRequest {
        fungible_unit: FUNGIBLE,
        reward_pool: REWARD,
        governance_unit: GOVERNANCE,
        registry: REGISTRY,
    }
}

/// Real factory actor, mocked dependencies: the happy path probes every address once,
/// in slot order, then reads the governance unit's wiring.
#[tokio::test]
async fn test_factory_actor_with_mocked_dependencies() {
    let mut deps = Dependencies::new();
    deps.expect_live(FUNGIBLE, ComponentKind::FungibleUnit);
    deps.expect_live(REWARD, ComponentKind::RewardPool);
    deps.expect_live(GOVERNANCE, ComponentKind::GovernanceUnit);
    deps.expect_live(REGISTRY, ComponentKind::Registry);
    deps.expect_governance_wired_to(leaves(REGISTRY));

    let (factory_actor, factory) = dao_factory::factory_actor::new(8);
    let handle = tokio::spawn(factory_actor.run(deps.context()));

    let bundle = factory.provision(request()).await.expect("Provision failed");
    assert_eq!(bundle.governance_unit, GOVERNANCE);
    assert_eq!(bundle.registry, REGISTRY);

    let stored = factory.get(bundle.id).await.unwrap();
    assert_eq!(stored, Some(bundle));

    deps.verify();
    drop(factory);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_factory_actor_rejects_mismatched_wiring() {
    let mut deps = Dependencies::new();
    deps.expect_live(FUNGIBLE, ComponentKind::FungibleUnit);
    deps.expect_live(REWARD, ComponentKind::RewardPool);
    deps.expect_live(GOVERNANCE, ComponentKind::GovernanceUnit);
    deps.expect_live(REGISTRY, ComponentKind::Registry);
    deps.expect_governance_wired_to(leaves(Address::from_raw(40)));

    let (factory_actor, factory) = dao_factory::factory_actor::new(8);
    tokio::spawn(factory_actor.run(deps.context()));

    let err = factory.provision(request()).await.unwrap_err();
    assert_eq!(
        err,
        ProvisionError::MismatchedWiring {
            role: ComponentKind::Registry,
            supplied: REGISTRY,
            recorded: Address::from_raw(40),
        }
    );
    assert!(factory.bundles().await.unwrap().is_empty());
    deps.verify();
}

/// A governance unit still initializing stops the probe before the registry is asked.
#[tokio::test]
async fn test_factory_actor_reports_dependency_not_ready() {
    let mut deps = Dependencies::new();
    deps.expect_live(FUNGIBLE, ComponentKind::FungibleUnit);
    deps.expect_live(REWARD, ComponentKind::RewardPool);
    deps.expect_status(GOVERNANCE, ComponentKind::GovernanceUnit, DeploymentStatus::Initializing);

    let (factory_actor, factory) = dao_factory::factory_actor::new(8);
    tokio::spawn(factory_actor.run(deps.context()));

    let err = factory.provision(request()).await.unwrap_err();
    assert_eq!(
        err,
        ProvisionError::DependencyNotReady {
            role: ComponentKind::GovernanceUnit,
            address: GOVERNANCE,
        }
    );
    assert!(factory.bundles().await.unwrap().is_empty());
    deps.verify();
}

/// A ledger that has gone away surfaces as a backend failure, not a panic.
#[tokio::test]
async fn test_factory_actor_reports_backend_failure() {
    let mut deps = Dependencies::new();
    deps.ledger
        .expect_get(FUNGIBLE)
        .return_err(ProvisionError::BackendFailure("Actor closed".into()));

    let (factory_actor, factory) = dao_factory::factory_actor::new(8);
    tokio::spawn(factory_actor.run(deps.context()));

    let err = factory.provision(request()).await.unwrap_err();
    assert!(matches!(err, ProvisionError::BackendFailure(_)));
    deps.verify();
}
