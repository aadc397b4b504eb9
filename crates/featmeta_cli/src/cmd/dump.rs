use std::path::PathBuf;

use serde_json::Value as Json;

use crate::cmd::document;
use crate::cmd::error::Result;
use crate::cmd::get::plain_text;
use crate::cmd::target::TargetType;
use crate::cmd::util::{PrintOptions, emit_json, render_value, value_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "type", value_enum)]
	pub target: Option<TargetType>,
	#[arg(long)]
	pub limit: Option<usize>,
	#[arg(long, conflicts_with = "target")]
	pub raw: bool,
	#[arg(long)]
	pub json: bool,
}

/// List every feature value of one property.
///
/// Without `--type` values are shown in their transformed kind; `--raw` shows storage values instead.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		target,
		limit,
		raw,
		json,
	} = args;

	let loaded = document::load(&path)?;
	let view = loaded.view();
	let options = PrintOptions::default();
	let shown = (view.size() as usize).min(limit.unwrap_or(options.max_features));

	let mut rows = Vec::with_capacity(shown);
	for index in 0..shown {
		let feature = index as i64;
		let (json_value, text) = match target {
			Some(target) => {
				let value = target.read(&view, feature, None)?;
				let text = plain_text(&value);
				(value, text)
			}
			None => {
				let value = if raw { view.raw_value(feature) } else { view.value(feature) };
				(value_json(&value), render_value(&value, options))
			}
		};
		rows.push(DumpRow {
			feature,
			value: json_value,
			text,
		});
	}

	if json {
		let payload = DumpJson {
			path: path.display().to_string(),
			value_type: view.value_type().label(),
			status: view.status().as_str(),
			size: view.size(),
			target: target.map(TargetType::as_str),
			raw,
			values: rows
				.into_iter()
				.map(|row| DumpValueJson {
					feature: row.feature,
					value: row.value,
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("type: {}", view.value_type().label());
	println!("status: {}", view.status().as_str());
	println!("size: {}", view.size());
	println!();
	println!("feature\tvalue");
	for row in &rows {
		println!("{}\t{}", row.feature, row.text);
	}
	if (view.size() as usize) > shown {
		println!("... {} more", view.size() as usize - shown);
	}

	Ok(())
}

struct DumpRow {
	feature: i64,
	value: Json,
	text: String,
}

#[derive(serde::Serialize)]
struct DumpJson {
	path: String,
	value_type: String,
	status: &'static str,
	size: u64,
	target: Option<&'static str>,
	raw: bool,
	values: Vec<DumpValueJson>,
}

#[derive(serde::Serialize)]
struct DumpValueJson {
	feature: i64,
	value: Json,
}

#[cfg(test)]
mod tests;
