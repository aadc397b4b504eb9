use crate::metadata::parse::{parse_bool, parse_float, parse_integer, parse_vec2};

#[test]
fn integers_require_the_whole_string() {
	assert_eq!(parse_integer::<i32>("42"), Some(42));
	assert_eq!(parse_integer::<i32>("  -17 "), Some(-17));
	assert_eq!(parse_integer::<i32>("+8"), Some(8));
	assert_eq!(parse_integer::<i32>("42x"), None);
	assert_eq!(parse_integer::<i32>("1,000"), None);
	assert_eq!(parse_integer::<i32>("1.5"), None);
	assert_eq!(parse_integer::<i32>(""), None);
	assert_eq!(parse_integer::<i32>("-"), None);
	assert_eq!(parse_integer::<i32>("+-3"), None);
}

#[test]
fn integers_respect_target_range() {
	assert_eq!(parse_integer::<i16>("32767"), Some(32767));
	assert_eq!(parse_integer::<i16>("32768"), None);
	assert_eq!(parse_integer::<i16>("-32768"), Some(-32768));
	assert_eq!(parse_integer::<u8>("-1"), None);
	assert_eq!(parse_integer::<u64>("18446744073709551615"), Some(u64::MAX));
	assert_eq!(parse_integer::<u64>("18446744073709551616"), None);
	assert_eq!(parse_integer::<i64>("99999999999999999999999999999999999999999"), None);
}

#[test]
fn floats_accept_decimal_grammar_only() {
	assert_eq!(parse_float("1.5"), Some(1.5));
	assert_eq!(parse_float(" -2.25e2 "), Some(-225.0));
	assert_eq!(parse_float("3"), Some(3.0));
	assert_eq!(parse_float(".5"), Some(0.5));
	assert_eq!(parse_float("5."), Some(5.0));
	assert_eq!(parse_float("1E-3"), Some(0.001));
	assert_eq!(parse_float("1,5"), None);
	assert_eq!(parse_float("1.5f"), None);
	assert_eq!(parse_float("inf"), None);
	assert_eq!(parse_float("NaN"), None);
	assert_eq!(parse_float("."), None);
	assert_eq!(parse_float("1e"), None);
	assert_eq!(parse_float("1e400"), None);
	assert_eq!(parse_float("0x10"), None);
}

#[test]
fn booleans_ignore_case() {
	assert_eq!(parse_bool("Yes"), Some(true));
	assert_eq!(parse_bool("NO"), Some(false));
	assert_eq!(parse_bool("true"), Some(true));
	assert_eq!(parse_bool("FALSE"), Some(false));
	assert_eq!(parse_bool("1"), Some(true));
	assert_eq!(parse_bool("0"), Some(false));
	assert_eq!(parse_bool("2"), None);
	assert_eq!(parse_bool("y"), None);
}

#[test]
fn vec2_literals_split_into_two_components() {
	assert_eq!(parse_vec2("(3, -4)").map(|[x, y]| (x.trim(), y.trim())), Some(("3", "-4")));
	assert_eq!(parse_vec2("int2(3, -4)").map(|[x, y]| (x.trim(), y.trim())), Some(("3", "-4")));
	assert_eq!(parse_vec2("  double2 ( 1.5 ,2 ) ").map(|[x, y]| (x.trim(), y.trim())), Some(("1.5", "2")));
}

#[test]
fn vec2_literals_reject_wrong_shapes() {
	assert_eq!(parse_vec2("(3,4,5)"), None);
	assert_eq!(parse_vec2("(3)"), None);
	assert_eq!(parse_vec2("3, 4"), None);
	assert_eq!(parse_vec2("(3, 4"), None);
	assert_eq!(parse_vec2("(, 4)"), None);
	assert_eq!(parse_vec2("2int(3, 4)"), None);
	assert_eq!(parse_vec2("int-2(3, 4)"), None);
}
