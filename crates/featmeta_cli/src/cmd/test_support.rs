use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use featmeta_testkit::{fixture_path, target_dir};

static BINARY: OnceLock<PathBuf> = OnceLock::new();

/// Fixture path as a command-line argument.
pub(crate) fn fixture_arg(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_featmeta(args: &[&str]) -> Output {
	let binary = BINARY.get_or_init(locate_binary);
	Command::new(binary).args(args).output().expect("featmeta should start")
}

/// Run and parse stdout as JSON; the command must succeed.
pub(crate) fn run_featmeta_json(args: &[&str]) -> serde_json::Value {
	let stdout = successful_stdout(args);
	serde_json::from_slice(&stdout).expect("featmeta should print JSON")
}

/// Run and return stdout as text; the command must succeed.
pub(crate) fn run_featmeta_text(args: &[&str]) -> String {
	let stdout = successful_stdout(args);
	String::from_utf8(stdout).expect("featmeta should print UTF-8")
}

fn successful_stdout(args: &[&str]) -> Vec<u8> {
	let output = run_featmeta(args);
	assert!(
		output.status.success(),
		"featmeta {args:?} exited with {}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	output.stdout
}

// Cargo only exports the binary path to integration tests, so unit tests build it on demand.
fn locate_binary() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_featmeta") {
		return PathBuf::from(path);
	}

	let file_name = format!("featmeta{}", std::env::consts::EXE_SUFFIX);
	let binary = target_dir().join("debug").join(file_name);
	let built = Command::new("cargo")
		.current_dir(env!("CARGO_MANIFEST_DIR"))
		.args(["build", "--quiet", "--package", "featmeta_cli", "--bin", "featmeta"])
		.status()
		.expect("cargo should start");
	assert!(built.success(), "building featmeta failed; expected binary at {}", binary.display());

	binary
}
