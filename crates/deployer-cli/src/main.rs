//! stark-deployer: declare and deploy Starknet contract classes from local
//! build artifacts.
//!
//! Scans `<target-path>/<profile>/` for `*.contract_class.json` /
//! `*.compiled_contract_class.json` pairs, declares every class that the
//! network does not know yet, then deploys the contracts selected by the
//! deploy filter (plus the optional primary contract) at the given salt.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use deployer_chain::StarknetClient;
use deployer_core::{resolve_artifacts, DeploymentPlan};

mod config;
mod output;

use output::Display;

#[derive(Parser)]
#[command(name = "stark-deployer")]
#[command(about = "Declare and deploy Starknet contract classes from build artifacts")]
#[command(version)]
struct Cli {
	/// Path to the build target directory (the profile subdirectory holds
	/// the artifacts)
	#[arg(short = 't', long)]
	target_path: PathBuf,

	/// Build profile whose artifacts are processed
	#[arg(long, default_value = "dev")]
	profile: String,

	/// Deployment salt, hex or decimal felt
	#[arg(short, long, default_value = "0x0")]
	salt: String,

	/// Deploy every declared contract whose name contains this substring
	#[arg(long, default_value = "_m_")]
	deploy_filter: String,

	/// Contract name to deploy unconditionally, regardless of the filter
	#[arg(long)]
	primary: Option<String>,

	/// Enable debug logging
	#[arg(long, env = "DEPLOYER_DEBUG")]
	debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.debug);

	let salt = config::parse_felt(&cli.salt).context("invalid --salt value")?;
	let credentials = config::load_credentials()?;

	let artifact_dir = cli.target_path.join(&cli.profile);
	debug!(directory = %artifact_dir.display(), "resolving artifacts");

	let artifacts = resolve_artifacts(&artifact_dir)?;
	if artifacts.is_empty() {
		Display::warning(&format!(
			"no contract artifacts found in {}",
			artifact_dir.display()
		));
		return Ok(());
	}

	let client = StarknetClient::connect(&credentials)
		.await
		.with_context(|| format!("failed to connect to {}", credentials.rpc_url))?;
	Display::success(&format!("Connected to {}", credentials.rpc_url));
	Display::kv("account", &format!("{:#x}", client.account_address()));
	Display::kv("contracts", &artifacts.len().to_string());

	let filter = cli.deploy_filter.clone();
	let mut plan =
		DeploymentPlan::new(salt).with_selector(move |name: &str| name.contains(&filter));
	if let Some(primary) = cli.primary {
		plan = plan.with_primary(primary);
	}

	let summary = deployer_core::run(&client, &artifacts, &plan).await;
	output::print_summary(&summary);

	Ok(())
}

fn init_logging(debug: bool) {
	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = if debug { "debug" } else { "info" };
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt().with_env_filter(env_filter).with_target(false).init();
}
