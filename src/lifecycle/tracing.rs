//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); actors tag every line
//! with `entity_type` instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per create, action and provision
//! RUST_LOG=debug cargo run    # adds request payloads and reference probes
//! ```
//!
//! A provisioning run at `info` looks like:
//!
//! ```text
//! INFO Actor started entity_type="DeploymentRecord"
//! INFO instantiate: Instantiated address=ct_1 kind=registry
//! INFO Created entity_type="Registry" id=ct_1 size=1
//! INFO init: Live address=ct_1
//! ...
//! INFO run: Leaves live fungible_unit=ct_2 reward_pool=ct_3 registry=ct_1
//! INFO Created entity_type="GovernanceUnit" id=ct_4 size=1
//! INFO Created entity_type="Bundle" id=bundle_1 size=1
//! INFO provision: Provisioned bundle=bundle_1 governance_unit=ct_4
//! ```
//!
//! Rejections are logged at `warn` with the offending id and the error, e.g.
//!
//! ```text
//! WARN on_create failed entity_type="GovernanceUnit" id=ct_8
//!     error=invalid config: quorum_percent: 150 is outside 0..=100
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
