//! Declare/deploy orchestration for Starknet contract classes.
//!
//! The pipeline runs strictly downward: the artifact resolver scans a build
//! directory into named artifact sets, the class-hash resolver derives each
//! set's Sierra class hash, the declaration service publishes classes
//! idempotently (existence check first, declare only on absence), and the
//! deployment service instantiates selected classes at salted, deterministic
//! addresses. The orchestrator drives both phases sequentially — the single
//! submitting account is nonce-ordered, so no two transactions may be in
//! flight at once — and isolates failures per contract.

pub mod artifacts;
pub mod class_hash;
pub mod declare;
pub mod deploy;
pub mod error;
pub mod orchestrator;

pub use artifacts::resolve_artifacts;
pub use class_hash::compute_class_hash;
pub use declare::{declare, declare_all};
pub use deploy::{deploy, derive_address};
pub use error::DeployError;
pub use orchestrator::{run, DeploymentPlan};

#[cfg(test)]
pub(crate) mod test_fixtures;
