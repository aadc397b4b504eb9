use crate::metadata::ComponentType;
use crate::metadata::convert::FromMetadataValue;

/// One decoded property value in its storage (or transformed) kind.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
	/// No value: out-of-range index, unreadable property, or undecodable bytes.
	Empty,
	/// Boolean.
	Bool(bool),
	/// Signed 8-bit integer.
	Int8(i8),
	/// Unsigned 8-bit integer.
	Uint8(u8),
	/// Signed 16-bit integer.
	Int16(i16),
	/// Unsigned 16-bit integer.
	Uint16(u16),
	/// Signed 32-bit integer.
	Int32(i32),
	/// Unsigned 32-bit integer.
	Uint32(u32),
	/// Signed 64-bit integer.
	Int64(i64),
	/// Unsigned 64-bit integer.
	Uint64(u64),
	/// Single precision float.
	Float32(f32),
	/// Double precision float.
	Float64(f64),
	/// UTF-8 string.
	String(Box<str>),
	/// Two-component numeric vector.
	Vec2(Vec2Value),
}

/// Two-component vector payload, one variant per component kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vec2Value {
	/// `int8` components.
	Int8([i8; 2]),
	/// `uint8` components.
	Uint8([u8; 2]),
	/// `int16` components.
	Int16([i16; 2]),
	/// `uint16` components.
	Uint16([u16; 2]),
	/// `int32` components.
	Int32([i32; 2]),
	/// `uint32` components.
	Uint32([u32; 2]),
	/// `int64` components.
	Int64([i64; 2]),
	/// `uint64` components.
	Uint64([u64; 2]),
	/// `float32` components.
	Float32([f32; 2]),
	/// `float64` components.
	Float64([f64; 2]),
}

/// Numeric scalar widened to a lossless common representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
	Int(i128),
	F32(f32),
	F64(f64),
}

impl Number {
	pub(crate) fn to_f64(self) -> f64 {
		match self {
			Self::Int(value) => value as f64,
			Self::F32(value) => f64::from(value),
			Self::F64(value) => value,
		}
	}
}

impl MetadataValue {
	/// True for [`MetadataValue::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Component type of numeric scalars and vectors.
	pub fn component_type(&self) -> Option<ComponentType> {
		Some(match self {
			Self::Int8(_) => ComponentType::Int8,
			Self::Uint8(_) => ComponentType::Uint8,
			Self::Int16(_) => ComponentType::Int16,
			Self::Uint16(_) => ComponentType::Uint16,
			Self::Int32(_) => ComponentType::Int32,
			Self::Uint32(_) => ComponentType::Uint32,
			Self::Int64(_) => ComponentType::Int64,
			Self::Uint64(_) => ComponentType::Uint64,
			Self::Float32(_) => ComponentType::Float32,
			Self::Float64(_) => ComponentType::Float64,
			Self::Vec2(vec) => vec.component_type(),
			Self::Empty | Self::Bool(_) | Self::String(_) => return None,
		})
	}

	/// Stable kind label, e.g. `uint8`, `string`, `vec2<float32>`.
	pub fn kind_name(&self) -> String {
		match self {
			Self::Empty => "empty".to_owned(),
			Self::Bool(_) => "boolean".to_owned(),
			Self::String(_) => "string".to_owned(),
			Self::Vec2(vec) => format!("vec2<{}>", vec.component_type().as_str()),
			other => other.component_type().map(ComponentType::as_str).unwrap_or("empty").to_owned(),
		}
	}

	/// Convert this value to `T`, or return `default` when the conversion is not possible.
	pub fn get<T: FromMetadataValue>(&self, default: T) -> T {
		T::from_metadata_value(self).unwrap_or(default)
	}

	pub(crate) fn as_number(&self) -> Option<Number> {
		Some(match *self {
			Self::Int8(value) => Number::Int(i128::from(value)),
			Self::Uint8(value) => Number::Int(i128::from(value)),
			Self::Int16(value) => Number::Int(i128::from(value)),
			Self::Uint16(value) => Number::Int(i128::from(value)),
			Self::Int32(value) => Number::Int(i128::from(value)),
			Self::Uint32(value) => Number::Int(i128::from(value)),
			Self::Int64(value) => Number::Int(i128::from(value)),
			Self::Uint64(value) => Number::Int(i128::from(value)),
			Self::Float32(value) => Number::F32(value),
			Self::Float64(value) => Number::F64(value),
			_ => return None,
		})
	}
}

impl Vec2Value {
	/// Component type shared by both components.
	pub fn component_type(&self) -> ComponentType {
		match self {
			Self::Int8(_) => ComponentType::Int8,
			Self::Uint8(_) => ComponentType::Uint8,
			Self::Int16(_) => ComponentType::Int16,
			Self::Uint16(_) => ComponentType::Uint16,
			Self::Int32(_) => ComponentType::Int32,
			Self::Uint32(_) => ComponentType::Uint32,
			Self::Int64(_) => ComponentType::Int64,
			Self::Uint64(_) => ComponentType::Uint64,
			Self::Float32(_) => ComponentType::Float32,
			Self::Float64(_) => ComponentType::Float64,
		}
	}

	/// Both components as standalone scalar values.
	pub fn components(&self) -> [MetadataValue; 2] {
		match *self {
			Self::Int8(v) => v.map(MetadataValue::Int8),
			Self::Uint8(v) => v.map(MetadataValue::Uint8),
			Self::Int16(v) => v.map(MetadataValue::Int16),
			Self::Uint16(v) => v.map(MetadataValue::Uint16),
			Self::Int32(v) => v.map(MetadataValue::Int32),
			Self::Uint32(v) => v.map(MetadataValue::Uint32),
			Self::Int64(v) => v.map(MetadataValue::Int64),
			Self::Uint64(v) => v.map(MetadataValue::Uint64),
			Self::Float32(v) => v.map(MetadataValue::Float32),
			Self::Float64(v) => v.map(MetadataValue::Float64),
		}
	}

	pub(crate) fn numbers(&self) -> [Number; 2] {
		match *self {
			Self::Int8(v) => v.map(|c| Number::Int(i128::from(c))),
			Self::Uint8(v) => v.map(|c| Number::Int(i128::from(c))),
			Self::Int16(v) => v.map(|c| Number::Int(i128::from(c))),
			Self::Uint16(v) => v.map(|c| Number::Int(i128::from(c))),
			Self::Int32(v) => v.map(|c| Number::Int(i128::from(c))),
			Self::Uint32(v) => v.map(|c| Number::Int(i128::from(c))),
			Self::Int64(v) => v.map(|c| Number::Int(i128::from(c))),
			Self::Uint64(v) => v.map(|c| Number::Int(i128::from(c))),
			Self::Float32(v) => v.map(Number::F32),
			Self::Float64(v) => v.map(Number::F64),
		}
	}
}

macro_rules! impl_from_scalar {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for MetadataValue {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}

			impl From<[$ty; 2]> for MetadataValue {
				fn from(value: [$ty; 2]) -> Self {
					Self::Vec2(Vec2Value::$variant(value))
				}
			}
		)*
	};
}

impl_from_scalar! {
	i8 => Int8,
	u8 => Uint8,
	i16 => Int16,
	u16 => Uint16,
	i32 => Int32,
	u32 => Uint32,
	i64 => Int64,
	u64 => Uint64,
	f32 => Float32,
	f64 => Float64,
}

impl From<bool> for MetadataValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<&str> for MetadataValue {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for MetadataValue {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}
