//! Contract build artifacts as they appear on disk.
//!
//! A Scarb/Sozo build leaves two files per contract in the profile directory:
//! the Sierra class definition (`<name>.contract_class.json`) and the compiled
//! CASM form (`<name>.compiled_contract_class.json`). The resolver pairs them
//! by the filename prefix before the first `.`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Filename suffix of the Sierra contract class artifact.
pub const CLASS_ARTIFACT_SUFFIX: &str = ".contract_class.json";

/// Filename suffix of the compiled (CASM) contract class artifact.
pub const COMPILED_CLASS_ARTIFACT_SUFFIX: &str = ".compiled_contract_class.json";

/// One logical contract build discovered in the artifact directory.
///
/// A set is created during the directory scan and is immutable afterwards.
/// Either path may be missing; an incomplete set survives resolution and is
/// rejected later, at declaration time, with an error naming the missing
/// file. Silent drops would hide broken builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifactSet {
	/// Contract name, the filename prefix before the first `.`.
	pub name: String,
	/// Path to the Sierra class definition, if found.
	pub class_path: Option<PathBuf>,
	/// Path to the compiled CASM artifact, if found.
	pub casm_path: Option<PathBuf>,
}

impl ContractArtifactSet {
	/// Creates an empty set for the given contract name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			class_path: None,
			casm_path: None,
		}
	}

	/// A set can be declared only when both artifacts were found.
	pub fn is_declarable(&self) -> bool {
		self.class_path.is_some() && self.casm_path.is_some()
	}

	/// Expected filename of the Sierra class artifact for this contract.
	pub fn class_file_name(&self) -> String {
		format!("{}{}", self.name, CLASS_ARTIFACT_SUFFIX)
	}

	/// Expected filename of the compiled CASM artifact for this contract.
	pub fn casm_file_name(&self) -> String {
		format!("{}{}", self.name, COMPILED_CLASS_ARTIFACT_SUFFIX)
	}
}
