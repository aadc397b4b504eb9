use std::path::PathBuf;

use featmeta::metadata::MetadataValue;

use crate::cmd::document;
use crate::cmd::error::Result;
use crate::cmd::util::{PrintOptions, emit_json, render_value, value_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the declared type, status, and class-level values of one property.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let loaded = document::load(&path)?;
	let view = loaded.view();
	let options = PrintOptions::for_summary();
	let sample_len = (view.size() as usize).min(options.max_features);
	let sample: Vec<MetadataValue> = (0..sample_len).map(|index| view.value(index as i64)).collect();

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			name: loaded.name.clone(),
			value_type: view.value_type().label(),
			count: view.descriptor().count,
			size: view.size(),
			status: view.status().as_str(),
			reason: view.invalid_reason().map(ToString::to_string),
			normalized: view.is_normalized(),
			offset: view.offset().map(value_json),
			scale: view.scale().map(value_json),
			min: view.min_value().map(value_json),
			max: view.max_value().map(value_json),
			no_data: view.no_data_value().map(value_json),
			default: view.default_value().map(value_json),
			sample: sample.iter().map(value_json).collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	if let Some(name) = &loaded.name {
		println!("name: {name}");
	}
	println!("type: {}", view.value_type().label());
	println!("count: {}", view.descriptor().count);
	println!("size: {}", view.size());
	println!("status: {}", view.status().as_str());
	if let Some(reason) = view.invalid_reason() {
		println!("reason: {reason}");
	}
	println!("normalized: {}", view.is_normalized());
	print_optional("offset", view.offset(), options);
	print_optional("scale", view.scale(), options);
	print_optional("min", view.min_value(), options);
	print_optional("max", view.max_value(), options);
	print_optional("no_data", view.no_data_value(), options);
	print_optional("default", view.default_value(), options);

	if !sample.is_empty() {
		println!("sample:");
		for (index, value) in sample.iter().enumerate() {
			println!("  {index}: {}", render_value(value, options));
		}
	}

	Ok(())
}

fn print_optional(label: &str, value: Option<&MetadataValue>, options: PrintOptions) {
	if let Some(value) = value {
		println!("{label}: {}", render_value(value, options));
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	name: Option<String>,
	value_type: String,
	count: u64,
	size: u64,
	status: &'static str,
	reason: Option<String>,
	normalized: bool,
	offset: Option<serde_json::Value>,
	scale: Option<serde_json::Value>,
	min: Option<serde_json::Value>,
	max: Option<serde_json::Value>,
	no_data: Option<serde_json::Value>,
	default: Option<serde_json::Value>,
	sample: Vec<serde_json::Value>,
}
