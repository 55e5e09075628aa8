//! Status transitions of a [`DeploymentRecord`](crate::model::DeploymentRecord).

#[derive(Debug, Clone)]
pub enum LedgerAction {
    /// `Reserved | Failed -> Initializing`
    Begin,
    /// `Initializing -> Live`
    Complete,
    /// `Initializing -> Failed(reason)`
    Fail(String),
}
