//! Reward pool actor: capped-supply incentive stores.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RewardClient;
use crate::framework::ResourceActor;
use crate::model::RewardPool;

/// Creates a new Reward Pool actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<RewardPool>, RewardClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, RewardClient::new(generic_client))
}
