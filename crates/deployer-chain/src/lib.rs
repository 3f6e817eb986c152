//! Chain client abstraction for the declare/deploy pipeline.
//!
//! This crate defines the capability the core services consume: class
//! existence lookup, declare submission, deploy submission, and blocking
//! confirmation. The error type distinguishes the expected negative result
//! of an existence check (`ClassNotFound`) from genuine transport faults and
//! rejections, so callers can branch on absence without a catch-all masking
//! real failures.

use async_trait::async_trait;
use starknet::core::types::{Felt, FlattenedSierraClass};
use std::sync::Arc;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod starknet;
}

pub use implementations::starknet::StarknetClient;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
	/// The queried class hash is not declared on the network. This is the
	/// expected negative result of an existence check, not a fault; callers
	/// branch on it to decide whether to declare.
	#[error("class not declared on the network")]
	ClassNotFound,
	/// Error that occurs during network communication.
	#[error("transport error: {0}")]
	Transport(String),
	/// The network refused the submitted transaction (bad fee, bad nonce,
	/// invalid payload).
	#[error("transaction rejected: {0}")]
	Rejected(String),
	/// The transaction was accepted but reverted during execution.
	#[error("transaction failed: {0}")]
	TransactionFailed(String),
	/// The confirmation wait exhausted its polling budget.
	#[error("timed out waiting for transaction confirmation")]
	Timeout,
}

/// Payload of a declare transaction: the flattened Sierra class plus the
/// hash of its compiled (CASM) counterpart.
#[derive(Debug, Clone)]
pub struct DeclareRequest {
	pub contract_class: Arc<FlattenedSierraClass>,
	pub compiled_class_hash: Felt,
}

/// Result of a declare submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareOutcome {
	pub transaction_hash: Felt,
	/// Class hash as registered by the network. Must match the locally
	/// computed hash; declaration correctness depends on the equality.
	pub class_hash: Felt,
}

/// Parameters of a deploy-through-UDC transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
	pub class_hash: Felt,
	pub salt: Felt,
	/// When false, the deployed address depends only on the class hash,
	/// salt, and constructor calldata, so it is reproducible across runs
	/// and accounts. Used intentionally for singleton contracts.
	pub unique: bool,
	pub constructor_calldata: Vec<Felt>,
}

/// Result of a deploy submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
	pub transaction_hash: Felt,
	pub address: Felt,
}

/// Trait defining the interface to the target network.
///
/// Implementations submit from a single account whose nonce is incremented
/// per transaction, so callers must not submit concurrently through one
/// client without their own nonce coordination.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait ChainClient: Send + Sync {
	/// Checks whether a class with the given hash is declared.
	///
	/// Returns `Ok(())` when the class exists and
	/// `Err(ChainError::ClassNotFound)` when it does not; any other error is
	/// a genuine fault.
	async fn get_class_by_hash(&self, class_hash: Felt) -> Result<(), ChainError>;

	/// Submits a declare transaction and returns its hash without waiting
	/// for confirmation.
	async fn declare_class(&self, request: DeclareRequest) -> Result<DeclareOutcome, ChainError>;

	/// Submits a deploy transaction through the Universal Deployer Contract
	/// and returns its hash and the deterministically derived address,
	/// without waiting for confirmation.
	async fn deploy_contract(&self, request: DeployRequest) -> Result<DeployOutcome, ChainError>;

	/// Blocks until the transaction is confirmed by the network.
	///
	/// A reverted transaction surfaces as `ChainError::TransactionFailed`
	/// carrying the revert reason; an exhausted polling budget surfaces as
	/// `ChainError::Timeout`.
	async fn wait_for_transaction(&self, transaction_hash: Felt) -> Result<(), ChainError>;
}
