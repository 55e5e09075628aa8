//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Every actor gets a named client (`TokenClient`, `GovernanceClient`, ...) that exposes
//! the actor's operations with their own argument and return types, plus the shared
//! read operations from [`ActorClient`].

/// Declares `<Name>Client`, a cloneable wrapper around `ResourceClient<Entity>` that
/// implements [`ActorClient`].
macro_rules! resource_client {
    ($(#[$meta:meta])* $name:ident => $entity:ty) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Clone)]
            pub struct [<$name Client>] {
                inner: $crate::framework::ResourceClient<$entity>,
            }

            impl [<$name Client>] {
                pub fn new(inner: $crate::framework::ResourceClient<$entity>) -> Self {
                    Self { inner }
                }
            }

            impl $crate::clients::ActorClient<$entity> for [<$name Client>] {
                fn inner(&self) -> &$crate::framework::ResourceClient<$entity> {
                    &self.inner
                }
            }
        }
    };
}

pub mod actor_client;
pub mod directory;
pub mod factory_client;
pub mod governance_client;
pub mod ledger_client;
pub mod registry_client;
pub mod reward_client;
pub mod token_client;

pub use actor_client::*;
pub use directory::*;
pub use factory_client::*;
pub use governance_client::*;
pub use ledger_client::*;
pub use registry_client::*;
pub use reward_client::*;
pub use token_client::*;
