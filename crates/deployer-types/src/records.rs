//! Results produced by a batch run.
//!
//! Records are transient: they exist for logging and for driving the deploy
//! phase off the declare phase within a single run. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use starknet::core::types::Felt;
use std::collections::BTreeMap;

/// Outcome of declaring one artifact set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
	/// Contract name the record belongs to.
	pub name: String,
	/// Sierra class hash, computed locally and confirmed by the network.
	pub class_hash: Felt,
	/// True when the class was already known on-chain and no declare
	/// transaction was submitted.
	pub already_declared: bool,
}

/// Outcome of deploying one instance of a declared class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
	/// Class hash the instance was deployed from.
	pub class_hash: Felt,
	/// Address of the deployed instance.
	pub address: Felt,
	/// Hash of the deploy transaction.
	pub transaction_hash: Felt,
}

/// A per-contract failure, kept so sibling contracts continue processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
	/// Contract name that failed.
	pub name: String,
	/// Human-readable cause.
	pub reason: String,
}

/// Aggregate result of one orchestrator run, suitable for logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
	/// Successful declarations, keyed by contract name.
	pub declarations: BTreeMap<String, DeclarationRecord>,
	/// Declarations that failed, with their causes.
	pub declare_failures: Vec<FailureRecord>,
	/// Successful deployments, keyed by contract name.
	pub deployments: BTreeMap<String, DeploymentRecord>,
	/// Deployments that failed, with their causes.
	pub deploy_failures: Vec<FailureRecord>,
}

impl RunSummary {
	/// True when every declaration and deployment in the run succeeded.
	pub fn is_clean(&self) -> bool {
		self.declare_failures.is_empty() && self.deploy_failures.is_empty()
	}

	/// Number of declarations that skipped submission because the class was
	/// already known on-chain.
	pub fn skipped_declarations(&self) -> usize {
		self.declarations
			.values()
			.filter(|record| record.already_declared)
			.count()
	}
}
