//! Factory actor: validates and records bundles.

pub mod entity;

use crate::clients::{Directory, FactoryClient, GovernanceClient};
use crate::framework::ResourceActor;
use crate::model::{Bundle, BundleId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Dependencies injected into the factory actor at `run()`.
#[derive(Clone)]
pub struct FactoryContext {
    pub directory: Directory,
    pub governance: GovernanceClient,
}

/// Creates a new Factory actor and its client.
///
/// Ids are drawn only when a create request reaches the actor, so a rejected provision
/// still consumes one. Ids stay unique and increasing.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Bundle>, FactoryClient) {
    let bundle_counter = Arc::new(AtomicU64::new(1));
    let next_bundle_id = move || BundleId(bundle_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) =
        ResourceActor::with_id_generator(mailbox_capacity, next_bundle_id);
    (actor, FactoryClient::new(generic_client))
}
