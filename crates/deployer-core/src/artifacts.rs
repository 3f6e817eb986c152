//! Artifact discovery: scan a build directory into named artifact sets.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use deployer_types::{
	ContractArtifactSet, CLASS_ARTIFACT_SUFFIX, COMPILED_CLASS_ARTIFACT_SUFFIX,
};
use tracing::debug;

use crate::error::{DeployError, Result};

/// Scans `directory` (non-recursively) and pairs build outputs into artifact
/// sets keyed by contract name.
///
/// The name is the filename prefix before the first `.`; a file matching the
/// class suffix fills the set's class path, one matching the compiled suffix
/// fills its CASM path. Files with neither suffix are ignored silently —
/// artifact directories also contain ABI JSON and other auxiliary outputs.
/// Entry order is not significant.
///
/// Incomplete sets (only one of the two files present) are kept; they fail
/// later at declaration with the missing file named.
pub fn resolve_artifacts(directory: &Path) -> Result<BTreeMap<String, ContractArtifactSet>> {
	let entries = fs::read_dir(directory)
		.map_err(|_| DeployError::ArtifactDirectoryNotFound(directory.to_path_buf()))?;

	let mut sets: BTreeMap<String, ContractArtifactSet> = BTreeMap::new();

	for entry in entries {
		let entry = entry.map_err(|source| DeployError::Io {
			path: directory.to_path_buf(),
			source,
		})?;
		let file_name = entry.file_name();
		let Some(file_name) = file_name.to_str() else {
			continue;
		};

		let name = file_name.split('.').next().unwrap_or(file_name).to_string();

		if file_name.ends_with(COMPILED_CLASS_ARTIFACT_SUFFIX) {
			sets.entry(name.clone())
				.or_insert_with(|| ContractArtifactSet::new(name))
				.casm_path = Some(entry.path());
		} else if file_name.ends_with(CLASS_ARTIFACT_SUFFIX) {
			sets.entry(name.clone())
				.or_insert_with(|| ContractArtifactSet::new(name))
				.class_path = Some(entry.path());
		}
	}

	debug!(
		directory = %directory.display(),
		contracts = sets.len(),
		"resolved artifact directory"
	);

	Ok(sets)
}
