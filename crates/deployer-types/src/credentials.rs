//! Account credentials for transaction submission.

use starknet::core::types::Felt;
use url::Url;

/// Read-only credentials shared by every operation in a run.
///
/// Sourced from the environment by the CLI; the core never reads the
/// environment itself.
#[derive(Clone)]
pub struct ChainCredentials {
	/// JSON-RPC endpoint of the target network.
	pub rpc_url: Url,
	/// Address of the submitting account.
	pub account_address: Felt,
	/// Private key of the submitting account.
	pub private_key: Felt,
}

// Manual Debug so the private key never lands in logs.
impl std::fmt::Debug for ChainCredentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ChainCredentials")
			.field("rpc_url", &self.rpc_url.as_str())
			.field("account_address", &format_args!("{:#x}", self.account_address))
			.field("private_key", &"<redacted>")
			.finish()
	}
}
