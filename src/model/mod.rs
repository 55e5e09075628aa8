//! Pure data structures (DTOs) implementing the
//! [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod address;
pub mod bundle;
pub mod deployment;
pub mod governance;
pub mod registry;
pub mod reward;
pub mod token;

pub use address::*;
pub use bundle::*;
pub use deployment::*;
pub use governance::*;
pub use registry::*;
pub use reward::*;
pub use token::*;
