//! Fixture lookup for featmeta tests.
//!
//! Property documents live in `<workspace>/fixtures`; CLI tests also need the directory the
//! `featmeta` binary is built into.

use std::path::{Path, PathBuf};

const FIXTURE_DIR: &str = "fixtures";

/// Directory holding the top-level `Cargo.toml`, two levels above this crate.
pub fn workspace_root() -> PathBuf {
	let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	let root = crate_dir.join("../..");
	root.canonicalize().unwrap_or(root)
}

/// Path of the property document `name` under the fixture directory.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join(FIXTURE_DIR).join(name)
}

/// Parsed JSON of the property document `name`; panics with the path when it is missing or malformed.
pub fn fixture_json(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} is unreadable: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("fixture {} is not JSON: {err}", path.display()))
}

/// Cargo build output directory, honoring `CARGO_TARGET_DIR`.
pub fn target_dir() -> PathBuf {
	match std::env::var_os("CARGO_TARGET_DIR") {
		Some(dir) => PathBuf::from(dir),
		None => workspace_root().join("target"),
	}
}
