//! Class artifact loading and class-hash derivation.
//!
//! Hashing is delegated to starknet-rs, which implements the network's
//! canonical algorithms (Poseidon over the Sierra program, entry points, and
//! ABI for the class hash; the CASM equivalent for the compiled class hash).
//! Declaration correctness depends on the local hash matching what the
//! network computes independently, so nothing here is hand-rolled.

use std::fs;
use std::path::Path;

use starknet::core::types::contract::{CompiledClass, SierraClass};
use starknet::core::types::Felt;

use crate::error::{DeployError, Result};

/// Loads and parses a Sierra contract class artifact.
pub fn load_sierra_class(path: &Path) -> Result<SierraClass> {
	let raw = fs::read(path).map_err(|source| DeployError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	serde_json::from_slice(&raw).map_err(|err| DeployError::MalformedArtifact {
		path: path.to_path_buf(),
		reason: err.to_string(),
	})
}

/// Loads and parses a compiled (CASM) contract class artifact.
pub fn load_compiled_class(path: &Path) -> Result<CompiledClass> {
	let raw = fs::read(path).map_err(|source| DeployError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	serde_json::from_slice(&raw).map_err(|err| DeployError::MalformedArtifact {
		path: path.to_path_buf(),
		reason: err.to_string(),
	})
}

/// Computes the Sierra class hash of the artifact at `path`.
///
/// Deterministic over the parsed class: byte-identical artifacts yield the
/// same hash. Pure computation, no network access.
pub fn compute_class_hash(path: &Path) -> Result<Felt> {
	let class = load_sierra_class(path)?;
	class
		.class_hash()
		.map_err(|err| DeployError::MalformedArtifact {
			path: path.to_path_buf(),
			reason: err.to_string(),
		})
}

/// Computes the compiled class hash of the CASM artifact at `path`, carried
/// in the declare transaction alongside the Sierra class.
pub fn compute_compiled_class_hash(path: &Path) -> Result<Felt> {
	let class = load_compiled_class(path)?;
	class
		.class_hash()
		.map_err(|err| DeployError::MalformedArtifact {
			path: path.to_path_buf(),
			reason: err.to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_fixtures::{compiled_class_json, sierra_class_json};
	use std::fs;

	#[test]
	fn class_hash_is_deterministic() {
		let dir = tempfile::tempdir().unwrap();
		let first = dir.path().join("first.contract_class.json");
		let second = dir.path().join("second.contract_class.json");
		let json = sierra_class_json(&["0x1", "0x2", "0x3"]);
		fs::write(&first, &json).unwrap();
		fs::write(&second, &json).unwrap();

		assert_eq!(
			compute_class_hash(&first).unwrap(),
			compute_class_hash(&second).unwrap()
		);
	}

	#[test]
	fn class_hash_changes_with_program_content() {
		let dir = tempfile::tempdir().unwrap();
		let first = dir.path().join("first.contract_class.json");
		let second = dir.path().join("second.contract_class.json");
		fs::write(&first, sierra_class_json(&["0x1", "0x2", "0x3"])).unwrap();
		fs::write(&second, sierra_class_json(&["0x1", "0x2", "0x4"])).unwrap();

		assert_ne!(
			compute_class_hash(&first).unwrap(),
			compute_class_hash(&second).unwrap()
		);
	}

	#[test]
	fn invalid_json_is_malformed_artifact() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bad.contract_class.json");
		fs::write(&path, "not json at all").unwrap();

		let result = compute_class_hash(&path);
		assert!(matches!(
			result,
			Err(DeployError::MalformedArtifact { path: p, .. }) if p == path
		));
	}

	#[test]
	fn structurally_wrong_json_is_malformed_artifact() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("wrong.contract_class.json");
		fs::write(&path, r#"{"some": "object"}"#).unwrap();

		assert!(matches!(
			compute_class_hash(&path),
			Err(DeployError::MalformedArtifact { .. })
		));
	}

	#[test]
	fn compiled_class_hash_parses_casm_artifact() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("a.compiled_contract_class.json");
		fs::write(&path, compiled_class_json()).unwrap();

		compute_compiled_class_hash(&path).unwrap();
	}

	#[test]
	fn missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.contract_class.json");

		assert!(matches!(
			compute_class_hash(&path),
			Err(DeployError::Io { .. })
		));
	}
}
