//! # DAO Factory
//!
//! > **All-or-nothing provisioning of DAO component bundles, on Tokio actors.**
//!
//! A DAO here is four components that refer to each other by address: a naming
//! registry, a fungible unit, a reward pool, and a governance unit wired to the other
//! three. The factory records a [`Bundle`](model::Bundle) only after confirming that
//! every component is live, supports the capability its slot needs, and that the
//! governance unit is wired to exactly the leaves supplied. Otherwise nothing is
//! recorded and a typed [`ProvisionError`] says why.
//!
//! ## Core Concepts
//!
//! ### One actor per component kind
//! Every kind is served by a generic `ResourceActor<T: ActorEntity>`: one Tokio task,
//! one mailbox, messages processed sequentially. Component instances are entities inside
//! the actor of their kind, keyed by [`Address`](model::Address). A ledger actor records
//! which addresses were issued, for what kind, and whether initialization finished.
//!
//! ### Validation in `on_create`
//! Cross-component checks run in the `on_create` hook of the governance and factory
//! actors, against a [`Directory`](clients::Directory) injected at `run()`. The actor
//! commits the new entity only if the hook succeeds, so a failed create leaves no trace.
//!
//! ### Typed handles
//! References are [`Handle<C>`](model::Handle)s, where `C` is a capability marker. The
//! type stops a registry handle from being passed as a token handle; the directory
//! re-checks at runtime any address that arrives untyped.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor engine and its mock client.
//! - [`model`]: addresses, handles, component records, bundles.
//! - [`registry_actor`], [`token_actor`], [`reward_actor`]: leaf components.
//! - [`ledger_actor`]: deployment status of every issued address.
//! - [`governance_actor`], [`factory_actor`]: the two validating actors.
//! - [`clients`]: typed wrappers around each actor's mailbox, and the
//!   [`Directory`](clients::Directory).
//! - [`lifecycle`]: [`ProvisioningSystem`](lifecycle::ProvisioningSystem),
//!   [`ProvisioningPipeline`](lifecycle::ProvisioningPipeline), tracing setup.
//! - [`config`]: mailbox size and policy limits, from TOML.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod factory_actor;
pub mod framework;
pub mod governance_actor;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
pub mod registry_actor;
pub mod reward_actor;
pub mod token_actor;

pub use error::{ProvisionError, ReferenceRole};
