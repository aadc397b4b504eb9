use crate::metadata::parse::{parse_bool, parse_float, parse_integer, parse_vec2};
use crate::metadata::value::Number;
use crate::metadata::{MetadataValue, Vec2Value};

/// Output types a metadata value can be coerced into.
///
/// Implemented for `bool`, every integer width from 8 to 64 bits, `f32`, `f64`, `String`,
/// and the two-component vectors `[i32; 2]`, `[u32; 2]`, `[f32; 2]` and `[f64; 2]`.
pub trait FromMetadataValue: Sized {
	/// Coerce `value`, or return `None` when no rule applies.
	fn from_metadata_value(value: &MetadataValue) -> Option<Self>;
}

/// Per-component rules shared by numeric scalar and vector targets.
trait ScalarTarget: Sized + Copy {
	fn from_number(number: Number) -> Option<Self>;
	fn from_bool(value: bool) -> Self;
	fn from_text(text: &str) -> Option<Self>;
}

fn scalar_from_value<T: ScalarTarget>(value: &MetadataValue) -> Option<T> {
	match value {
		MetadataValue::Bool(flag) => Some(T::from_bool(*flag)),
		MetadataValue::String(text) => T::from_text(text),
		other => T::from_number(other.as_number()?),
	}
}

fn vec2_from_value<T: ScalarTarget>(value: &MetadataValue) -> Option<[T; 2]> {
	match value {
		MetadataValue::Vec2(vec) => {
			let [x, y] = vec.numbers();
			Some([T::from_number(x)?, T::from_number(y)?])
		}
		MetadataValue::String(text) => {
			let [x, y] = parse_vec2(text)?;
			Some([T::from_text(x)?, T::from_text(y)?])
		}
		other => {
			let item = scalar_from_value::<T>(other)?;
			Some([item, item])
		}
	}
}

fn integer_from_number<T: TryFrom<i128>>(number: Number) -> Option<T> {
	match number {
		Number::Int(value) => T::try_from(value).ok(),
		Number::F32(value) => truncate_float(f64::from(value)),
		Number::F64(value) => truncate_float(value),
	}
}

// `as i128` saturates, so anything past the 64-bit range still fails `try_from`.
fn truncate_float<T: TryFrom<i128>>(value: f64) -> Option<T> {
	if !value.is_finite() {
		return None;
	}
	T::try_from(value.trunc() as i128).ok()
}

fn integer_from_text<T: TryFrom<i128>>(text: &str) -> Option<T> {
	parse_integer(text).or_else(|| parse_float(text).and_then(truncate_float))
}

fn narrow_to_f32(value: f64) -> Option<f32> {
	if value.is_finite() && (value > f64::from(f32::MAX) || value < f64::from(f32::MIN)) {
		return None;
	}
	Some(value as f32)
}

macro_rules! impl_integer_target {
	($($ty:ty),* $(,)?) => {
		$(
			impl ScalarTarget for $ty {
				fn from_number(number: Number) -> Option<Self> {
					integer_from_number(number)
				}

				fn from_bool(value: bool) -> Self {
					Self::from(value)
				}

				fn from_text(text: &str) -> Option<Self> {
					integer_from_text(text)
				}
			}

			impl FromMetadataValue for $ty {
				fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
					scalar_from_value(value)
				}
			}
		)*
	};
}

impl_integer_target!(i8, u8, i16, u16, i32, u32, i64, u64);

impl ScalarTarget for f64 {
	fn from_number(number: Number) -> Option<Self> {
		Some(number.to_f64())
	}

	fn from_bool(value: bool) -> Self {
		if value { 1.0 } else { 0.0 }
	}

	fn from_text(text: &str) -> Option<Self> {
		parse_float(text)
	}
}

impl ScalarTarget for f32 {
	fn from_number(number: Number) -> Option<Self> {
		match number {
			Number::Int(value) => Some(value as f32),
			Number::F32(value) => Some(value),
			Number::F64(value) => narrow_to_f32(value),
		}
	}

	fn from_bool(value: bool) -> Self {
		if value { 1.0 } else { 0.0 }
	}

	fn from_text(text: &str) -> Option<Self> {
		parse_float(text).and_then(narrow_to_f32)
	}
}

impl FromMetadataValue for f32 {
	fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
		scalar_from_value(value)
	}
}

impl FromMetadataValue for f64 {
	fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
		scalar_from_value(value)
	}
}

impl FromMetadataValue for bool {
	fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
		match value {
			MetadataValue::Bool(flag) => Some(*flag),
			MetadataValue::String(text) => parse_bool(text),
			other => Some(match other.as_number()? {
				Number::Int(value) => value != 0,
				Number::F32(value) => value != 0.0,
				Number::F64(value) => value != 0.0,
			}),
		}
	}
}

impl FromMetadataValue for String {
	fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
		match value {
			MetadataValue::Empty => None,
			MetadataValue::Bool(flag) => Some(flag.to_string()),
			MetadataValue::String(text) => Some(text.to_string()),
			MetadataValue::Vec2(vec) => Some(vec2_text(vec)),
			other => Some(number_text(other.as_number()?)),
		}
	}
}

fn number_text(number: Number) -> String {
	match number {
		Number::Int(value) => value.to_string(),
		Number::F32(value) => value.to_string(),
		Number::F64(value) => value.to_string(),
	}
}

fn vec2_text(vec: &Vec2Value) -> String {
	let [x, y] = vec.numbers();
	format!("({}, {})", number_text(x), number_text(y))
}

macro_rules! impl_vec2_target {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromMetadataValue for [$ty; 2] {
				fn from_metadata_value(value: &MetadataValue) -> Option<Self> {
					vec2_from_value(value)
				}
			}
		)*
	};
}

impl_vec2_target!(i32, u32, f32, f64);
