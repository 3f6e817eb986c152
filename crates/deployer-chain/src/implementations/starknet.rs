//! JSON-RPC chain client backed by a single Starknet account.
//!
//! Declares and deploys are submitted as v3 transactions through a
//! `SingleOwnerAccount`; deploys go through the Universal Deployer Contract
//! via `ContractFactory`. Confirmation is a bounded receipt-polling loop.

use starknet::{
	accounts::{Account, ExecutionEncoding, SingleOwnerAccount},
	contract::ContractFactory,
	core::types::{BlockId, BlockTag, ExecutionResult, Felt, StarknetError, TransactionReceipt},
	providers::{jsonrpc::HttpTransport, JsonRpcClient, Provider, ProviderError},
	signers::{LocalWallet, SigningKey},
};
use std::time::Duration;
use tracing::debug;

use crate::{ChainClient, ChainError, DeclareOutcome, DeclareRequest, DeployOutcome, DeployRequest};
use deployer_types::ChainCredentials;

const POLL_INTERVAL: Duration = Duration::from_secs(1);
const MAX_POLL_ATTEMPTS: u32 = 120;

/// Chain client over a Starknet JSON-RPC endpoint and one account.
pub struct StarknetClient {
	provider: JsonRpcClient<HttpTransport>,
	account: SingleOwnerAccount<JsonRpcClient<HttpTransport>, LocalWallet>,
	poll_interval: Duration,
	max_poll_attempts: u32,
}

impl StarknetClient {
	/// Connects to the endpoint, resolves the network's chain id, and binds
	/// the account used for every submission in the run.
	pub async fn connect(credentials: &ChainCredentials) -> Result<Self, ChainError> {
		let provider = JsonRpcClient::new(HttpTransport::new(credentials.rpc_url.clone()));

		let chain_id = provider.chain_id().await.map_err(|err| {
			ChainError::Transport(format!(
				"failed to connect to {}: {}",
				credentials.rpc_url, err
			))
		})?;
		debug!(chain_id = %format!("{chain_id:#x}"), "connected to network");

		let signer = LocalWallet::from(SigningKey::from_secret_scalar(credentials.private_key));
		let mut account = SingleOwnerAccount::new(
			provider.clone(),
			signer,
			credentials.account_address,
			chain_id,
			ExecutionEncoding::New,
		);
		// Query nonces against the pending block so that back-to-back
		// submissions within one run see each other.
		account.set_block_id(BlockId::Tag(BlockTag::Pending));

		Ok(Self {
			provider,
			account,
			poll_interval: POLL_INTERVAL,
			max_poll_attempts: MAX_POLL_ATTEMPTS,
		})
	}

	/// Address of the submitting account.
	pub fn account_address(&self) -> Felt {
		self.account.address()
	}
}

#[async_trait::async_trait]
impl ChainClient for StarknetClient {
	async fn get_class_by_hash(&self, class_hash: Felt) -> Result<(), ChainError> {
		match self
			.provider
			.get_class(BlockId::Tag(BlockTag::Pending), class_hash)
			.await
		{
			Ok(_) => Ok(()),
			Err(ProviderError::StarknetError(StarknetError::ClassHashNotFound)) => {
				Err(ChainError::ClassNotFound)
			},
			Err(err) => Err(ChainError::Transport(format!(
				"class lookup failed: {}",
				err
			))),
		}
	}

	async fn declare_class(&self, request: DeclareRequest) -> Result<DeclareOutcome, ChainError> {
		let result = self
			.account
			.declare_v3(request.contract_class, request.compiled_class_hash)
			.send()
			.await
			.map_err(|err| ChainError::Rejected(format!("declare submission failed: {}", err)))?;

		debug!(
			transaction_hash = %format!("{:#x}", result.transaction_hash),
			class_hash = %format!("{:#x}", result.class_hash),
			"declare transaction submitted"
		);

		Ok(DeclareOutcome {
			transaction_hash: result.transaction_hash,
			class_hash: result.class_hash,
		})
	}

	async fn deploy_contract(&self, request: DeployRequest) -> Result<DeployOutcome, ChainError> {
		let factory = ContractFactory::new(request.class_hash, &self.account);
		let deployment =
			factory.deploy_v3(request.constructor_calldata, request.salt, request.unique);
		let address = deployment.deployed_address();

		let result = deployment
			.send()
			.await
			.map_err(|err| ChainError::Rejected(format!("deploy submission failed: {}", err)))?;

		debug!(
			transaction_hash = %format!("{:#x}", result.transaction_hash),
			address = %format!("{address:#x}"),
			"deploy transaction submitted"
		);

		Ok(DeployOutcome {
			transaction_hash: result.transaction_hash,
			address,
		})
	}

	async fn wait_for_transaction(&self, transaction_hash: Felt) -> Result<(), ChainError> {
		let mut attempts = 0;

		loop {
			match self.provider.get_transaction_receipt(transaction_hash).await {
				Ok(receipt) => {
					let execution_result = match &receipt.receipt {
						TransactionReceipt::Invoke(r) => &r.execution_result,
						TransactionReceipt::Declare(r) => &r.execution_result,
						TransactionReceipt::Deploy(r) => &r.execution_result,
						TransactionReceipt::DeployAccount(r) => &r.execution_result,
						TransactionReceipt::L1Handler(r) => &r.execution_result,
					};
					return match execution_result {
						ExecutionResult::Succeeded => Ok(()),
						ExecutionResult::Reverted { reason } => {
							Err(ChainError::TransactionFailed(reason.clone()))
						},
					};
				},
				// Not yet in a block; keep polling.
				Err(ProviderError::StarknetError(StarknetError::TransactionHashNotFound)) => {},
				Err(err) => {
					return Err(ChainError::Transport(format!(
						"receipt lookup failed: {}",
						err
					)))
				},
			}

			attempts += 1;
			if attempts >= self.max_poll_attempts {
				return Err(ChainError::Timeout);
			}

			tokio::time::sleep(self.poll_interval).await;
		}
	}
}
