//! Error taxonomy for the declare/deploy pipeline.
//!
//! Two tiers: `ArtifactDirectoryNotFound` is fatal and aborts the run before
//! any processing; every other variant is scoped to a single contract and is
//! caught at the batch boundary so sibling contracts keep going.

use deployer_chain::ChainError;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type alias using the local error type.
pub type Result<T> = std::result::Result<T, DeployError>;

/// Errors raised by the resolver and the declare/deploy services.
#[derive(Debug, Error)]
pub enum DeployError {
	/// The artifact directory does not exist or cannot be read. Fatal:
	/// there is nothing to process.
	#[error("artifact directory not found: {0}")]
	ArtifactDirectoryNotFound(PathBuf),

	/// An artifact file is not valid JSON or lacks the structure of a
	/// contract class. Isolated to the contract it belongs to.
	#[error("malformed artifact {path}: {reason}")]
	MalformedArtifact { path: PathBuf, reason: String },

	/// Only one of the two artifact files was found for a contract. The
	/// missing filename is spelled out so the broken build is obvious.
	#[error("artifact set for `{name}` is incomplete: missing {missing}")]
	IncompleteArtifactSet { name: String, missing: String },

	/// An artifact file could not be read.
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A chain operation failed. `ChainError::ClassNotFound` never reaches
	/// this variant; the declaration service consumes it as the signal to
	/// declare.
	#[error(transparent)]
	Chain(#[from] ChainError),
}
