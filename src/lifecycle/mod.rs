//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors, and the deployment flows built on top.
//!
//! - [`ProvisioningSystem`] spawns the ledger, leaf, governance and factory actors,
//!   injects their contexts, and doubles as the deployment backend
//!   (`instantiate` / `init` / `create`).
//! - [`ProvisioningPipeline`] deploys a whole DAO from a [`DeploymentPlan`]: leaves in
//!   parallel, then governance, then the bundle.
//! - [`setup_tracing`] installs the log subscriber.
//!
//! ## Dependency Injection via Context
//!
//! Actors are constructed without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for GovernanceUnit {
//!     type Context = GovernanceContext; // Directory + PolicyLimits
//! }
//!
//! impl ActorEntity for Bundle {
//!     type Context = FactoryContext; // Directory + GovernanceClient
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the factory's channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`, the actor drops its
//!    context, which in turn closes the channels of the actors it depended on
//! 3. **Await completion** - wait for all actor tasks to finish
//!
//! This relies on the dependency graph being acyclic, which it is: no actor holds a
//! client to itself or to anything that depends on it.

pub mod pipeline;
pub mod provisioning_system;
pub mod tracing;

pub use pipeline::*;
pub use provisioning_system::*;
pub use self::tracing::setup_tracing;
