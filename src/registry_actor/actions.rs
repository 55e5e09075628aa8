//! Naming operations on a [`Registry`](crate::model::Registry).

use crate::model::Address;

#[derive(Debug, Clone)]
pub enum RegistryAction {
    /// Binds `key` to `address`. Fails if the key is already bound.
    Register { key: String, address: Address },
    /// Looks up the address bound to a key.
    Resolve(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryActionResult {
    Registered,
    Resolved(Address),
}
