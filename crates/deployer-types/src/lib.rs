//! Shared types for the declare/deploy orchestrator.
//!
//! This crate defines the data model passed between the artifact resolver,
//! the chain client, and the batch orchestrator: discovered artifact sets,
//! declaration and deployment records, and the credentials used to talk to
//! the network. All types here are plain data; no I/O happens in this crate.

pub mod artifact;
pub mod credentials;
pub mod records;

pub use artifact::{ContractArtifactSet, CLASS_ARTIFACT_SUFFIX, COMPILED_CLASS_ARTIFACT_SUFFIX};
pub use credentials::ChainCredentials;
pub use records::{DeclarationRecord, DeploymentRecord, FailureRecord, RunSummary};
