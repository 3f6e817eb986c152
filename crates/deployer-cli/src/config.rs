//! Process configuration: environment-sourced credentials and felt parsing.

use deployer_types::ChainCredentials;
use starknet::core::types::Felt;
use thiserror::Error;
use url::Url;

/// Environment variable holding the JSON-RPC endpoint.
pub const RPC_URL_VAR: &str = "STARKNET_RPC_URL";
/// Environment variable holding the submitting account address.
pub const ACCOUNT_ADDRESS_VAR: &str = "STARKNET_ACCOUNT_ADDRESS";
/// Environment variable holding the account private key.
pub const PRIVATE_KEY_VAR: &str = "STARKNET_PRIVATE_KEY";

/// Fatal configuration errors; the run aborts before any processing.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("missing credentials: environment variable {0} is not set")]
	CredentialsMissing(&'static str),

	#[error("invalid value in {var}: {reason}")]
	InvalidValue { var: &'static str, reason: String },

	#[error("invalid felt `{0}`: expected a 0x-prefixed hex or decimal value")]
	InvalidFelt(String),
}

/// Reads chain credentials from the environment.
pub fn load_credentials() -> Result<ChainCredentials, ConfigError> {
	let rpc_url = require_env(RPC_URL_VAR)?;
	let rpc_url = Url::parse(&rpc_url).map_err(|err| ConfigError::InvalidValue {
		var: RPC_URL_VAR,
		reason: err.to_string(),
	})?;

	let account_address = parse_env_felt(ACCOUNT_ADDRESS_VAR)?;
	// Keep the key value out of the error message.
	let private_key =
		parse_felt(&require_env(PRIVATE_KEY_VAR)?).map_err(|_| ConfigError::InvalidValue {
			var: PRIVATE_KEY_VAR,
			reason: "value is not a valid felt".to_string(),
		})?;

	Ok(ChainCredentials {
		rpc_url,
		account_address,
		private_key,
	})
}

/// Parses a felt from a 0x-prefixed hex string or a decimal string.
pub fn parse_felt(value: &str) -> Result<Felt, ConfigError> {
	let parsed = if value.starts_with("0x") || value.starts_with("0X") {
		Felt::from_hex(value).ok()
	} else {
		Felt::from_dec_str(value).ok()
	};
	parsed.ok_or_else(|| ConfigError::InvalidFelt(value.to_string()))
}

fn parse_env_felt(var: &'static str) -> Result<Felt, ConfigError> {
	let value = require_env(var)?;
	parse_felt(&value).map_err(|_| ConfigError::InvalidValue {
		var,
		reason: format!("`{value}` is not a valid felt"),
	})
}

fn require_env(var: &'static str) -> Result<String, ConfigError> {
	match std::env::var(var) {
		Ok(value) if !value.trim().is_empty() => Ok(value),
		_ => Err(ConfigError::CredentialsMissing(var)),
	}
}
