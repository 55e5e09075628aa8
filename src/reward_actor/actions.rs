use crate::model::Address;

#[derive(Debug, Clone)]
pub enum RewardAction {
    /// Allocates `amount` from the pool to `to`.
    Distribute { to: Address, amount: u128 },
    Remaining,
    AllocationOf(Address),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardActionResult {
    /// Undistributed supply, after the action.
    Remaining(u128),
    Allocation(u128),
}
