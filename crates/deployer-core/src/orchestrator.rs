//! Batch orchestration: declare everything, then deploy a selected subset.
//!
//! Both phases run strictly sequentially. All transactions come from one
//! account whose nonce increments per submission; interleaving submissions
//! without coordinated nonce assignment risks collisions and rejections, so
//! the ordering here is a correctness requirement, not a simplification.

use std::collections::BTreeMap;

use deployer_chain::ChainClient;
use deployer_types::{ContractArtifactSet, DeploymentRecord, FailureRecord, RunSummary};
use starknet::core::types::Felt;
use tracing::{info, warn};

use crate::declare::declare_all;
use crate::deploy::deploy;

/// What to deploy after the declare phase.
///
/// The selector predicate chooses declared contracts by name; the optional
/// primary contract is deployed unconditionally, regardless of the selector.
/// Everything deploys at the plan's salt with `unique = false`, so addresses
/// are reproducible across runs.
pub struct DeploymentPlan {
	salt: Felt,
	primary: Option<String>,
	selector: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl DeploymentPlan {
	/// A plan that deploys nothing beyond the primary contract, if set.
	pub fn new(salt: Felt) -> Self {
		Self {
			salt,
			primary: None,
			selector: Box::new(|_| false),
		}
	}

	/// Sets the predicate choosing which declared contracts to deploy.
	pub fn with_selector(mut self, selector: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
		self.selector = Box::new(selector);
		self
	}

	/// Designates a contract deployed unconditionally at the plan's salt.
	pub fn with_primary(mut self, name: impl Into<String>) -> Self {
		self.primary = Some(name.into());
		self
	}

	pub fn salt(&self) -> Felt {
		self.salt
	}
}

impl std::fmt::Debug for DeploymentPlan {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DeploymentPlan")
			.field("salt", &format_args!("{:#x}", self.salt))
			.field("primary", &self.primary)
			.finish()
	}
}

/// Runs the full batch: declares every artifact set, then deploys the
/// primary contract (if designated) and every declared contract the
/// selector matches.
///
/// Failures are isolated per contract in both phases; a contract whose
/// declaration failed is never considered for deployment. The summary is
/// suitable for logging and is not persisted.
pub async fn run(
	client: &dyn ChainClient,
	sets: &BTreeMap<String, ContractArtifactSet>,
	plan: &DeploymentPlan,
) -> RunSummary {
	info!(contracts = sets.len(), "starting declare phase");
	let (declarations, declare_failures) = declare_all(client, sets).await;
	info!(
		declared = declarations.len(),
		failed = declare_failures.len(),
		"declare phase finished"
	);

	let mut deployments = BTreeMap::new();
	let mut deploy_failures = Vec::new();

	if let Some(primary) = plan.primary.as_deref() {
		match declarations.get(primary) {
			Some(record) => {
				deploy_one(
					client,
					primary,
					record.class_hash,
					plan.salt,
					&mut deployments,
					&mut deploy_failures,
				)
				.await;
			},
			None => {
				warn!(
					contract = primary,
					"primary contract has no successful declaration, skipping deployment"
				);
			},
		}
	}

	for (name, record) in &declarations {
		// Already handled above; never deploy the primary twice.
		if plan.primary.as_deref() == Some(name.as_str()) {
			continue;
		}
		if !(plan.selector)(name) {
			continue;
		}
		deploy_one(
			client,
			name,
			record.class_hash,
			plan.salt,
			&mut deployments,
			&mut deploy_failures,
		)
		.await;
	}

	info!(
		deployed = deployments.len(),
		failed = deploy_failures.len(),
		"deploy phase finished"
	);

	RunSummary {
		declarations,
		declare_failures,
		deployments,
		deploy_failures,
	}
}

async fn deploy_one(
	client: &dyn ChainClient,
	name: &str,
	class_hash: Felt,
	salt: Felt,
	deployments: &mut BTreeMap<String, DeploymentRecord>,
	failures: &mut Vec<FailureRecord>,
) {
	match deploy(client, class_hash, salt, false).await {
		Ok(record) => {
			info!(
				contract = name,
				address = %format!("{:#x}", record.address),
				"deployed"
			);
			deployments.insert(name.to_string(), record);
		},
		Err(err) => {
			warn!(contract = name, error = %err, "deployment failed");
			failures.push(FailureRecord {
				name: name.to_string(),
				reason: err.to_string(),
			});
		},
	}
}
