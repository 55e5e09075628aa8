//! Deployment ledger actor: one record per issued address.

mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::LedgerClient;
use crate::framework::ResourceActor;
use crate::model::{Address, DeploymentRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Ledger actor and its client.
///
/// Addresses are issued from 1 upward; 0 is the null address and is never handed out.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<DeploymentRecord>, LedgerClient) {
    let address_counter = Arc::new(AtomicU64::new(1));
    let next_address = move || Address::from_raw(address_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::with_id_generator(mailbox_capacity, next_address);
    (actor, LedgerClient::new(generic_client))
}
