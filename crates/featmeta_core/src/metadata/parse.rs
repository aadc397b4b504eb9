//! Locale-independent grammars for reading numbers, booleans, and vector literals out of strings.
//!
//! Every parser trims surrounding whitespace and then requires the whole remainder to match.
//! Failure is always `None`.

/// Parse `[+-]?[0-9]+` into any integer type, rejecting values outside its range.
pub fn parse_integer<T: TryFrom<i128>>(text: &str) -> Option<T> {
	let text = text.trim();
	let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
	if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}

	let value = text.parse::<i128>().ok()?;
	T::try_from(value).ok()
}

/// Parse a decimal floating-point literal with optional fraction and exponent.
///
/// `inf`, `nan`, hex floats, and digit grouping are rejected, as are literals that overflow `f64`.
pub fn parse_float(text: &str) -> Option<f64> {
	let text = text.trim();
	if !is_decimal_literal(text.as_bytes()) {
		return None;
	}

	let value = text.parse::<f64>().ok()?;
	value.is_finite().then_some(value)
}

/// Parse `0`/`false`/`no` and `1`/`true`/`yes`, ignoring ASCII case.
pub fn parse_bool(text: &str) -> Option<bool> {
	let text = text.trim();
	if text == "1" || text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("yes") {
		Some(true)
	} else if text == "0" || text.eq_ignore_ascii_case("false") || text.eq_ignore_ascii_case("no") {
		Some(false)
	} else {
		None
	}
}

/// Split a two-component vector literal, `(X, Y)` or `name(X, Y)`, into its untrimmed components.
///
/// The optional prefix must be an identifier. It is not checked against any component kind.
pub fn parse_vec2(text: &str) -> Option<[&str; 2]> {
	let text = strip_type_prefix(text.trim()).trim_start();
	let inner = text.strip_prefix('(')?.strip_suffix(')')?;

	let (x, y) = inner.split_once(',')?;
	if y.contains(',') || x.trim().is_empty() || y.trim().is_empty() {
		return None;
	}
	Some([x, y])
}

fn strip_type_prefix(text: &str) -> &str {
	let bytes = text.as_bytes();
	match bytes.first() {
		Some(first) if first.is_ascii_alphabetic() || *first == b'_' => {}
		_ => return text,
	}

	let end = bytes
		.iter()
		.position(|byte| !(byte.is_ascii_alphanumeric() || *byte == b'_'))
		.unwrap_or(bytes.len());
	&text[end..]
}

fn is_decimal_literal(bytes: &[u8]) -> bool {
	let mut idx = 0_usize;
	if matches!(bytes.first(), Some(b'+' | b'-')) {
		idx += 1;
	}

	let int_start = idx;
	while idx < bytes.len() && bytes[idx].is_ascii_digit() {
		idx += 1;
	}
	let mut digits = idx - int_start;

	if idx < bytes.len() && bytes[idx] == b'.' {
		idx += 1;
		let frac_start = idx;
		while idx < bytes.len() && bytes[idx].is_ascii_digit() {
			idx += 1;
		}
		digits += idx - frac_start;
	}

	if digits == 0 {
		return false;
	}

	if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
		idx += 1;
		if idx < bytes.len() && matches!(bytes[idx], b'+' | b'-') {
			idx += 1;
		}
		let exp_start = idx;
		while idx < bytes.len() && bytes[idx].is_ascii_digit() {
			idx += 1;
		}
		if idx == exp_start {
			return false;
		}
	}

	idx == bytes.len()
}

#[cfg(test)]
mod tests;
