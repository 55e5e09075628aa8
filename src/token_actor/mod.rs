//! Fungible unit actor, including balance operations.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::TokenClient;
use crate::framework::ResourceActor;
use crate::model::FungibleUnit;

/// Creates a new Fungible Unit actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<FungibleUnit>, TokenClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, TokenClient::new(generic_client))
}
