//! Instance deployment for declared classes.
//!
//! Deployment goes through the Universal Deployer Contract: the instance
//! address is a deterministic function of the class hash, salt, uniqueness
//! flag, and constructor calldata. Unlike declaration, deployment is not
//! idempotent at this layer — deploying onto an occupied address fails at
//! the network and surfaces as an ordinary deployment failure.

use deployer_chain::{ChainClient, DeployRequest};
use deployer_types::DeploymentRecord;
use starknet::core::types::Felt;
use starknet::core::utils::{get_udc_deployed_address, UdcUniqueness};
use tracing::info;

use crate::error::Result;

/// Deterministic UDC address for a non-unique deployment.
///
/// `unique = false` with a fixed salt yields the same address across runs
/// and across deploying accounts; singleton contracts rely on this.
pub fn derive_address(class_hash: Felt, salt: Felt, constructor_calldata: &[Felt]) -> Felt {
	get_udc_deployed_address(
		salt,
		class_hash,
		&UdcUniqueness::NotUnique,
		constructor_calldata,
	)
}

/// Deploys one instance of a declared class and blocks until the deploy
/// transaction is confirmed.
pub async fn deploy(
	client: &dyn ChainClient,
	class_hash: Felt,
	salt: Felt,
	unique: bool,
) -> Result<DeploymentRecord> {
	let outcome = client
		.deploy_contract(DeployRequest {
			class_hash,
			salt,
			unique,
			constructor_calldata: Vec::new(),
		})
		.await?;
	client.wait_for_transaction(outcome.transaction_hash).await?;

	info!(
		class_hash = %format!("{class_hash:#x}"),
		address = %format!("{:#x}", outcome.address),
		transaction_hash = %format!("{:#x}", outcome.transaction_hash),
		"contract deployed"
	);

	Ok(DeploymentRecord {
		class_hash,
		address: outcome.address,
		transaction_hash: outcome.transaction_hash,
	})
}
