use crate::cmd::test_support::{fixture_arg, run_featmeta_json, run_featmeta_text};

#[test]
fn dump_lists_transformed_values() {
	let json = run_featmeta_json(&["dump", &fixture_arg("offsets_vec2.json"), "--json"]);

	assert_eq!(json["value_type"], "vec2<int16>");
	assert_eq!(json["values"][1]["value"], serde_json::json!([300, 4]));
}

#[test]
fn dump_raw_keeps_sentinels() {
	let fixture = fixture_arg("classification.json");

	let json = run_featmeta_json(&["dump", &fixture, "--raw", "--json"]);
	assert_eq!(json["values"][1]["value"], 255);

	let json = run_featmeta_json(&["dump", &fixture, "--json"]);
	assert_eq!(json["values"][1]["value"], 10);
}

#[test]
fn dump_converts_to_requested_type() {
	let json = run_featmeta_json(&["dump", &fixture_arg("offsets_vec2.json"), "--type", "uint2", "--json"]);

	assert_eq!(json["target"], "uint2");
	assert_eq!(json["values"][0]["value"], serde_json::json!([0, 0]));
	assert_eq!(json["values"][1]["value"], serde_json::json!([300, 4]));
}

#[test]
fn dump_text_respects_limit() {
	let text = run_featmeta_text(&["dump", &fixture_arg("flags.json"), "--limit", "2"]);

	assert!(text.contains("0\ttrue"));
	assert!(text.contains("1\tfalse"));
	assert!(!text.contains("2\ttrue"));
	assert!(text.contains("... 1 more"));
}

#[test]
fn dump_of_missing_values_is_empty() {
	let json = run_featmeta_json(&["dump", &fixture_arg("missing_values.json"), "--json"]);

	assert_eq!(json["status"], "error_invalid_property_data");
	assert!(json["values"].as_array().is_some_and(|items| items.is_empty()));
}
