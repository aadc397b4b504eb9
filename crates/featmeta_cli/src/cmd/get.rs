use std::path::PathBuf;

use serde_json::Value as Json;

use crate::cmd::document;
use crate::cmd::error::Result;
use crate::cmd::target::TargetType;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, allow_hyphen_values = true)]
	pub feature: i64,
	#[arg(long = "type", value_enum)]
	pub target: TargetType,
	#[arg(long, allow_hyphen_values = true)]
	pub default: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Read one feature converted to the requested type.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		feature,
		target,
		default,
		json,
	} = args;

	let loaded = document::load(&path)?;
	let view = loaded.view();
	let value = target.read(&view, feature, default.as_deref())?;

	if json {
		let payload = GetJson {
			feature,
			target: target.as_str(),
			status: view.status().as_str(),
			value,
		};
		return emit_json(&payload);
	}

	println!("{}", plain_text(&value));
	Ok(())
}

/// Strings print bare, pairs as `(x, y)`, everything else as JSON text.
pub(crate) fn plain_text(value: &Json) -> String {
	match value {
		Json::String(text) => text.clone(),
		Json::Array(items) => {
			let parts: Vec<String> = items.iter().map(plain_text).collect();
			format!("({})", parts.join(", "))
		}
		other => other.to_string(),
	}
}

#[derive(serde::Serialize)]
struct GetJson {
	feature: i64,
	target: &'static str,
	status: &'static str,
	value: Json,
}
