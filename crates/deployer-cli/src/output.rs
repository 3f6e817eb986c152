//! Terminal output helpers for per-contract progress and the run summary.
//!
//! Human-readable only; nothing here is meant to be machine-parsed.

use colored::Colorize;
use deployer_types::RunSummary;
use starknet::core::types::Felt;

/// Terminal display utilities for formatted CLI output.
pub struct Display;

impl Display {
	/// Displays a formatted section header with underline.
	pub fn header(text: &str) {
		println!("\n{}", text.bold().cyan());
		println!("{}", "─".repeat(text.len()).cyan());
	}

	/// Displays a success message with green checkmark.
	pub fn success(message: &str) {
		println!("{} {}", "✓".green().bold(), message);
	}

	/// Displays an error message with red X symbol to stderr.
	pub fn error(message: &str) {
		eprintln!("{} {}", "✗".red().bold(), message.red());
	}

	/// Displays a warning message with yellow warning symbol.
	pub fn warning(message: &str) {
		println!("{} {}", "⚠".yellow().bold(), message.yellow());
	}

	/// Displays a key-value pair with formatted labels.
	pub fn kv(key: &str, value: &str) {
		println!("  {} {}", format!("{}:", key).bold(), value);
	}
}

fn hex(felt: Felt) -> String {
	format!("{felt:#x}")
}

/// Prints the per-contract outcome of a finished run.
pub fn print_summary(summary: &RunSummary) {
	Display::header("Declarations");
	for (name, record) in &summary.declarations {
		let status = if record.already_declared {
			"already declared"
		} else {
			"declared"
		};
		Display::success(&format!("{name} {status}"));
		Display::kv("class hash", &hex(record.class_hash));
	}
	for failure in &summary.declare_failures {
		Display::error(&format!("{}: {}", failure.name, failure.reason));
	}

	Display::header("Deployments");
	if summary.deployments.is_empty() && summary.deploy_failures.is_empty() {
		println!("  (nothing selected for deployment)");
	}
	for (name, record) in &summary.deployments {
		Display::success(&format!("{name} deployed"));
		Display::kv("address", &hex(record.address));
		Display::kv("transaction", &hex(record.transaction_hash));
	}
	for failure in &summary.deploy_failures {
		Display::error(&format!("{}: {}", failure.name, failure.reason));
	}

	Display::header("Summary");
	Display::kv(
		"declared",
		&format!(
			"{} ({} skipped as already declared)",
			summary.declarations.len(),
			summary.skipped_declarations()
		),
	);
	Display::kv("deployed", &summary.deployments.len().to_string());
	let failures = summary.declare_failures.len() + summary.deploy_failures.len();
	if failures > 0 {
		Display::warning(&format!("{failures} contract(s) failed; see above"));
	}
}
