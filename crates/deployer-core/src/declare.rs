//! Idempotent class declaration.
//!
//! Declaring a class is a one-time, run-independent action: the existence
//! check and the declare submission are two outcomes of one operation.
//! Declaring the same class twice, in one run or across runs, never
//! double-submits and never errors merely because the class exists.

use std::collections::BTreeMap;
use std::sync::Arc;

use deployer_chain::{ChainClient, ChainError, DeclareRequest};
use deployer_types::{ContractArtifactSet, DeclarationRecord, FailureRecord};
use tracing::{info, warn};

use crate::class_hash::{load_compiled_class, load_sierra_class};
use crate::error::{DeployError, Result};

/// Declares one artifact set, skipping submission when the class is already
/// known on-chain.
///
/// Blocks until the declare transaction is confirmed before returning, so a
/// deployment referencing this class later in the run cannot race an
/// un-finalized declaration.
pub async fn declare(
	client: &dyn ChainClient,
	name: &str,
	set: &ContractArtifactSet,
) -> Result<DeclarationRecord> {
	let class_path = set
		.class_path
		.as_deref()
		.ok_or_else(|| DeployError::IncompleteArtifactSet {
			name: name.to_string(),
			missing: set.class_file_name(),
		})?;
	let casm_path = set
		.casm_path
		.as_deref()
		.ok_or_else(|| DeployError::IncompleteArtifactSet {
			name: name.to_string(),
			missing: set.casm_file_name(),
		})?;

	let sierra = load_sierra_class(class_path)?;
	let class_hash = sierra
		.class_hash()
		.map_err(|err| DeployError::MalformedArtifact {
			path: class_path.to_path_buf(),
			reason: err.to_string(),
		})?;

	match client.get_class_by_hash(class_hash).await {
		Ok(()) => {
			info!(
				contract = name,
				class_hash = %format!("{class_hash:#x}"),
				"class already declared, skipping"
			);
			return Ok(DeclarationRecord {
				name: name.to_string(),
				class_hash,
				already_declared: true,
			});
		},
		// Absence is the signal to declare, not a fault.
		Err(ChainError::ClassNotFound) => {},
		Err(err) => return Err(err.into()),
	}

	let compiled = load_compiled_class(casm_path)?;
	let compiled_class_hash =
		compiled
			.class_hash()
			.map_err(|err| DeployError::MalformedArtifact {
				path: casm_path.to_path_buf(),
				reason: err.to_string(),
			})?;
	let flattened = sierra
		.flatten()
		.map_err(|err| DeployError::MalformedArtifact {
			path: class_path.to_path_buf(),
			reason: err.to_string(),
		})?;

	info!(
		contract = name,
		class_hash = %format!("{class_hash:#x}"),
		"declaring class"
	);

	let outcome = client
		.declare_class(DeclareRequest {
			contract_class: Arc::new(flattened),
			compiled_class_hash,
		})
		.await?;
	client.wait_for_transaction(outcome.transaction_hash).await?;

	info!(
		contract = name,
		class_hash = %format!("{:#x}", outcome.class_hash),
		transaction_hash = %format!("{:#x}", outcome.transaction_hash),
		"class declared"
	);

	Ok(DeclarationRecord {
		name: name.to_string(),
		class_hash: outcome.class_hash,
		already_declared: false,
	})
}

/// Declares every artifact set sequentially, isolating failures per contract.
///
/// A failed declaration is logged with its cause and recorded as a failure;
/// it never aborts the remaining sets. The returned map holds only
/// successful declarations, so downstream deployment cannot pick up an
/// invalid identifier.
pub async fn declare_all(
	client: &dyn ChainClient,
	sets: &BTreeMap<String, ContractArtifactSet>,
) -> (BTreeMap<String, DeclarationRecord>, Vec<FailureRecord>) {
	let mut records = BTreeMap::new();
	let mut failures = Vec::new();

	for (name, set) in sets {
		match declare(client, name, set).await {
			Ok(record) => {
				records.insert(name.clone(), record);
			},
			Err(err) => {
				warn!(contract = %name, error = %err, "declaration failed");
				failures.push(FailureRecord {
					name: name.clone(),
					reason: err.to_string(),
				});
			},
		}
	}

	(records, failures)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::artifacts::resolve_artifacts;
	use crate::test_fixtures::{write_artifact_pair, StubChain};
	use std::fs;
	use std::sync::atomic::Ordering;

	#[tokio::test]
	async fn declares_unknown_class_and_waits() {
		let dir = tempfile::tempdir().unwrap();
		write_artifact_pair(dir.path(), "counter", &["0x1", "0x2"]);
		let sets = resolve_artifacts(dir.path()).unwrap();

		let chain = StubChain::new();
		let record = declare(&chain, "counter", &sets["counter"]).await.unwrap();

		assert!(!record.already_declared);
		assert_eq!(chain.declare_count(), 1);
		assert_eq!(chain.waits.load(Ordering::SeqCst), 1);
		assert!(chain
			.known_classes
			.lock()
			.unwrap()
			.contains(&record.class_hash));
	}

	#[tokio::test]
	async fn second_declaration_submits_nothing() {
		let dir = tempfile::tempdir().unwrap();
		write_artifact_pair(dir.path(), "counter", &["0x1", "0x2"]);
		let sets = resolve_artifacts(dir.path()).unwrap();

		let chain = StubChain::new();
		let first = declare(&chain, "counter", &sets["counter"]).await.unwrap();
		let second = declare(&chain, "counter", &sets["counter"]).await.unwrap();

		assert_eq!(chain.declare_count(), 1);
		assert!(!first.already_declared);
		assert!(second.already_declared);
		assert_eq!(first.class_hash, second.class_hash);
	}

	#[tokio::test]
	async fn known_class_is_skipped_without_submission() {
		let dir = tempfile::tempdir().unwrap();
		write_artifact_pair(dir.path(), "counter", &["0x1", "0x2"]);
		let sets = resolve_artifacts(dir.path()).unwrap();
		let class_hash =
			crate::compute_class_hash(sets["counter"].class_path.as_deref().unwrap()).unwrap();

		let chain = StubChain::new().with_known_class(class_hash);
		let record = declare(&chain, "counter", &sets["counter"]).await.unwrap();

		assert!(record.already_declared);
		assert_eq!(record.class_hash, class_hash);
		assert_eq!(chain.declare_count(), 0);
	}

	#[tokio::test]
	async fn incomplete_set_names_missing_file_and_skips_chain() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(
			dir.path().join("orphan.contract_class.json"),
			crate::test_fixtures::sierra_class_json(&["0x1"]),
		)
		.unwrap();
		let sets = resolve_artifacts(dir.path()).unwrap();

		let chain = StubChain::new();
		let result = declare(&chain, "orphan", &sets["orphan"]).await;

		assert!(matches!(
			result,
			Err(DeployError::IncompleteArtifactSet { ref name, ref missing })
				if name == "orphan" && missing == "orphan.compiled_contract_class.json"
		));
		assert_eq!(chain.lookups.load(Ordering::SeqCst), 0);
		assert_eq!(chain.declare_count(), 0);
	}

	#[tokio::test]
	async fn incomplete_set_does_not_affect_complete_sibling() {
		let dir = tempfile::tempdir().unwrap();
		write_artifact_pair(dir.path(), "A", &["0xa"]);
		fs::write(
			dir.path().join("B.contract_class.json"),
			crate::test_fixtures::sierra_class_json(&["0xb"]),
		)
		.unwrap();
		let sets = resolve_artifacts(dir.path()).unwrap();

		let chain = StubChain::new();
		let (records, failures) = declare_all(&chain, &sets).await;

		assert!(records.contains_key("A"));
		assert!(!records.contains_key("B"));
		assert_eq!(failures.len(), 1);
		assert!(failures[0].reason.contains("B.compiled_contract_class.json"));
	}

	#[tokio::test]
	async fn failure_in_one_set_does_not_abort_the_batch() {
		let dir = tempfile::tempdir().unwrap();
		write_artifact_pair(dir.path(), "a_first", &["0x1"]);
		write_artifact_pair(dir.path(), "b_broken", &["0x2"]);
		fs::write(dir.path().join("b_broken.contract_class.json"), "not json").unwrap();
		write_artifact_pair(dir.path(), "c_last", &["0x3"]);
		let sets = resolve_artifacts(dir.path()).unwrap();

		let chain = StubChain::new();
		let (records, failures) = declare_all(&chain, &sets).await;

		assert_eq!(records.len(), 2);
		assert!(records.contains_key("a_first"));
		assert!(records.contains_key("c_last"));
		assert_eq!(failures.len(), 1);
		assert_eq!(failures[0].name, "b_broken");
		assert_eq!(chain.declare_count(), 2);
	}
}
