use featmeta::metadata::MetadataValue;
use serde::Serialize;
use serde_json::Value as Json;

use crate::cmd::error::Result;

/// Output truncation limits for listed values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of features listed.
	pub max_features: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_features: 256,
			max_string_len: 200,
		}
	}
}

impl PrintOptions {
	/// Preset for the short sample printed by `info`.
	pub fn for_summary() -> Self {
		Self {
			max_features: 8,
			max_string_len: 60,
		}
	}
}

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}

/// Map a decoded value onto JSON; `Empty` and non-finite floats become `null`.
pub(crate) fn value_json(value: &MetadataValue) -> Json {
	match value {
		MetadataValue::Empty => Json::Null,
		MetadataValue::Bool(flag) => Json::Bool(*flag),
		MetadataValue::Int8(item) => Json::from(*item),
		MetadataValue::Uint8(item) => Json::from(*item),
		MetadataValue::Int16(item) => Json::from(*item),
		MetadataValue::Uint16(item) => Json::from(*item),
		MetadataValue::Int32(item) => Json::from(*item),
		MetadataValue::Uint32(item) => Json::from(*item),
		MetadataValue::Int64(item) => Json::from(*item),
		MetadataValue::Uint64(item) => Json::from(*item),
		MetadataValue::Float32(item) => float_json(f64::from(*item)),
		MetadataValue::Float64(item) => float_json(*item),
		MetadataValue::String(text) => Json::String(text.to_string()),
		MetadataValue::Vec2(vec) => Json::Array(vec.components().iter().map(value_json).collect()),
	}
}

fn float_json(value: f64) -> Json {
	serde_json::Number::from_f64(value).map(Json::Number).unwrap_or(Json::Null)
}

/// Render a decoded value for tab-separated text output.
pub(crate) fn render_value(value: &MetadataValue, options: PrintOptions) -> String {
	match value {
		MetadataValue::Empty => "-".to_owned(),
		MetadataValue::String(text) => format!("{:?}", truncate(text, options.max_string_len)),
		other => other.get(String::new()),
	}
}

/// Cut `text` to at most `max_chars` scalar values, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((byte, _)) => format!("{}...", &text[..byte]),
		None => text.to_owned(),
	}
}

#[cfg(test)]
mod tests {
	use featmeta::metadata::{MetadataValue, Vec2Value};
	use serde_json::json;

	use super::{PrintOptions, render_value, truncate, value_json};

	#[test]
	fn truncates_on_char_boundaries() {
		assert_eq!(truncate("héllo", 2), "hé...");
		assert_eq!(truncate("abc", 3), "abc");
		assert_eq!(truncate("", 0), "");
	}

	#[test]
	fn maps_values_to_json() {
		assert_eq!(value_json(&MetadataValue::Empty), json!(null));
		assert_eq!(value_json(&MetadataValue::Uint64(u64::MAX)), json!(u64::MAX));
		assert_eq!(value_json(&MetadataValue::Float64(f64::NAN)), json!(null));
		assert_eq!(value_json(&MetadataValue::Vec2(Vec2Value::Int8([-1, 2]))), json!([-1, 2]));
	}

	#[test]
	fn renders_text_cells() {
		let options = PrintOptions::for_summary();
		assert_eq!(render_value(&MetadataValue::Empty, options), "-");
		assert_eq!(render_value(&MetadataValue::Float32(0.5), options), "0.5");
		assert_eq!(render_value(&MetadataValue::from("a\tb"), options), "\"a\\tb\"");
	}
}
