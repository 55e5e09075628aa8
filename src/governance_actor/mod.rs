//! Governance unit actor.

pub mod entity;
pub mod validation;

use crate::clients::{Directory, GovernanceClient};
use crate::config::PolicyLimits;
use crate::framework::ResourceActor;
use crate::model::GovernanceUnit;

/// Dependencies injected into the governance actor at `run()`.
#[derive(Clone)]
pub struct GovernanceContext {
    pub directory: Directory,
    pub limits: PolicyLimits,
}

/// Creates a new Governance actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<GovernanceUnit>, GovernanceClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, GovernanceClient::new(generic_client))
}
