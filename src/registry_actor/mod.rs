//! Registry actor: naming stores mapping keys to addresses.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RegistryClient;
use crate::framework::ResourceActor;
use crate::model::Registry;

/// Creates a new Registry actor and its client. Registries are keyed by the address the
/// ledger reserved for them, so the actor has no id generator.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Registry>, RegistryClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, RegistryClient::new(generic_client))
}
