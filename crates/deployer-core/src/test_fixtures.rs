//! Minimal contract-class fixtures for tests.
//!
//! The JSON carries just enough structure to parse as `SierraClass` /
//! `CompiledClass` and hash deterministically; the program felts
//! differentiate one fixture contract from another.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use deployer_chain::{
	ChainClient, ChainError, DeclareOutcome, DeclareRequest, DeployOutcome, DeployRequest,
};
use starknet::core::types::Felt;

/// A parseable Sierra class artifact with the given program felts.
pub(crate) fn sierra_class_json(program: &[&str]) -> String {
	let felts = program
		.iter()
		.map(|felt| format!("\"{felt}\""))
		.collect::<Vec<_>>()
		.join(",");
	format!(
		r#"{{
	"sierra_program": [{felts}],
	"sierra_program_debug_info": {{"type_names": [], "libfunc_names": [], "user_func_names": []}},
	"contract_class_version": "0.1.0",
	"entry_points_by_type": {{"EXTERNAL": [], "L1_HANDLER": [], "CONSTRUCTOR": []}},
	"abi": []
}}"#
	)
}

/// A parseable CASM artifact.
pub(crate) fn compiled_class_json() -> String {
	r#"{
	"prime": "0x800000000000011000000000000000000000000000000000000000000000001",
	"compiler_version": "2.8.2",
	"bytecode": ["0x1", "0x2"],
	"hints": [],
	"entry_points_by_type": {"EXTERNAL": [], "L1_HANDLER": [], "CONSTRUCTOR": []}
}"#
	.to_string()
}

/// Writes a complete artifact pair for `name` into `dir`.
pub(crate) fn write_artifact_pair(dir: &Path, name: &str, program: &[&str]) {
	fs::write(
		dir.join(format!("{name}.contract_class.json")),
		sierra_class_json(program),
	)
	.unwrap();
	fs::write(
		dir.join(format!("{name}.compiled_contract_class.json")),
		compiled_class_json(),
	)
	.unwrap();
}

/// In-memory chain double that records submissions.
///
/// Declared classes become visible to subsequent existence checks, which is
/// what the idempotency tests exercise.
#[derive(Default)]
pub(crate) struct StubChain {
	pub known_classes: Mutex<HashSet<Felt>>,
	pub lookups: AtomicUsize,
	pub declare_submissions: AtomicUsize,
	pub deploy_requests: Mutex<Vec<DeployRequest>>,
	pub failing_deploys: Mutex<HashSet<Felt>>,
	pub waits: AtomicUsize,
}

impl StubChain {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_known_class(self, class_hash: Felt) -> Self {
		self.known_classes.lock().unwrap().insert(class_hash);
		self
	}

	/// Makes deploys of the given class hash fail at the network layer.
	pub fn failing_deploy_of(self, class_hash: Felt) -> Self {
		self.failing_deploys.lock().unwrap().insert(class_hash);
		self
	}

	pub fn declare_count(&self) -> usize {
		self.declare_submissions.load(Ordering::SeqCst)
	}

	pub fn deploy_count(&self) -> usize {
		self.deploy_requests.lock().unwrap().len()
	}
}

#[async_trait::async_trait]
impl ChainClient for StubChain {
	async fn get_class_by_hash(&self, class_hash: Felt) -> Result<(), ChainError> {
		self.lookups.fetch_add(1, Ordering::SeqCst);
		if self.known_classes.lock().unwrap().contains(&class_hash) {
			Ok(())
		} else {
			Err(ChainError::ClassNotFound)
		}
	}

	async fn declare_class(&self, request: DeclareRequest) -> Result<DeclareOutcome, ChainError> {
		let class_hash = request.contract_class.class_hash();
		self.declare_submissions.fetch_add(1, Ordering::SeqCst);
		self.known_classes.lock().unwrap().insert(class_hash);
		Ok(DeclareOutcome {
			transaction_hash: Felt::from(0xdec0de_u64),
			class_hash,
		})
	}

	async fn deploy_contract(&self, request: DeployRequest) -> Result<DeployOutcome, ChainError> {
		if self
			.failing_deploys
			.lock()
			.unwrap()
			.contains(&request.class_hash)
		{
			return Err(ChainError::Rejected(
				"contract already deployed at target address".into(),
			));
		}
		let address = crate::deploy::derive_address(
			request.class_hash,
			request.salt,
			&request.constructor_calldata,
		);
		self.deploy_requests.lock().unwrap().push(request);
		Ok(DeployOutcome {
			transaction_hash: Felt::from(0xd3b107_u64),
			address,
		})
	}

	async fn wait_for_transaction(&self, _transaction_hash: Felt) -> Result<(), ChainError> {
		self.waits.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}
}
