use crate::model::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A naming store mapping keys to addresses. Keys are unique per instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    pub address: Address,
    pub entries: HashMap<String, Address>,
}

impl Registry {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            entries: HashMap::new(),
        }
    }
}
