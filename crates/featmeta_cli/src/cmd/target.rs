use featmeta::metadata::{FromMetadataValue, MetadataValue, PropertyView};
use serde::Serialize;
use serde_json::Value as Json;

use crate::cmd::error::{CliError, Result};

/// Type a feature value is converted to on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TargetType {
	/// `bool`
	Bool,
	/// `i8`
	Int8,
	/// `u8`
	Uint8,
	/// `i16`
	Int16,
	/// `u16`
	Uint16,
	/// `i32`
	Int32,
	/// `u32`
	Uint32,
	/// `i64`
	Int64,
	/// `u64`
	Uint64,
	/// `f32`
	Float,
	/// `f64`
	Double,
	/// `String`
	String,
	/// `[i32; 2]`
	Int2,
	/// `[u32; 2]`
	Uint2,
	/// `[f32; 2]`
	Float2,
	/// `[f64; 2]`
	Double2,
}

impl TargetType {
	/// Command-line spelling.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int8 => "int8",
			Self::Uint8 => "uint8",
			Self::Int16 => "int16",
			Self::Uint16 => "uint16",
			Self::Int32 => "int32",
			Self::Uint32 => "uint32",
			Self::Int64 => "int64",
			Self::Uint64 => "uint64",
			Self::Float => "float",
			Self::Double => "double",
			Self::String => "string",
			Self::Int2 => "int2",
			Self::Uint2 => "uint2",
			Self::Float2 => "float2",
			Self::Double2 => "double2",
		}
	}

	/// Read `feature` through the view as this type and map the result onto JSON.
	///
	/// `default` is parsed with the same string grammar used for string-typed values.
	pub fn read(self, view: &PropertyView<'_>, feature: i64, default: Option<&str>) -> Result<Json> {
		match self {
			Self::Bool => read_as::<bool>(self, view, feature, default),
			Self::Int8 => read_as::<i8>(self, view, feature, default),
			Self::Uint8 => read_as::<u8>(self, view, feature, default),
			Self::Int16 => read_as::<i16>(self, view, feature, default),
			Self::Uint16 => read_as::<u16>(self, view, feature, default),
			Self::Int32 => read_as::<i32>(self, view, feature, default),
			Self::Uint32 => read_as::<u32>(self, view, feature, default),
			Self::Int64 => read_as::<i64>(self, view, feature, default),
			Self::Uint64 => read_as::<u64>(self, view, feature, default),
			Self::Float => read_as::<f32>(self, view, feature, default),
			Self::Double => read_as::<f64>(self, view, feature, default),
			Self::String => read_as::<String>(self, view, feature, default),
			Self::Int2 => read_as::<[i32; 2]>(self, view, feature, default),
			Self::Uint2 => read_as::<[u32; 2]>(self, view, feature, default),
			Self::Float2 => read_as::<[f32; 2]>(self, view, feature, default),
			Self::Double2 => read_as::<[f64; 2]>(self, view, feature, default),
		}
	}
}

fn read_as<T>(target: TargetType, view: &PropertyView<'_>, feature: i64, default: Option<&str>) -> Result<Json>
where
	T: FromMetadataValue + Default + Serialize,
{
	let default = match default {
		Some(text) => T::from_metadata_value(&MetadataValue::from(text)).ok_or_else(|| CliError::InvalidDefault {
			value: text.to_owned(),
			target: target.as_str(),
		})?,
		None => T::default(),
	};
	Ok(serde_json::to_value(view.get(feature, default))?)
}

#[cfg(test)]
mod tests {
	use featmeta::metadata::{ComponentType, PropertyBuffers, PropertyDescriptor, PropertyView, ValueType};
	use serde_json::json;

	use super::TargetType;
	use crate::cmd::error::CliError;

	#[test]
	fn reads_each_target_from_uint8_storage() {
		let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Uint8), 2);
		let bytes = [7_u8, 200];
		let view = PropertyView::new(&descriptor, PropertyBuffers::values(&bytes));

		assert_eq!(TargetType::Int8.read(&view, 0, None).expect("int8"), json!(7));
		assert_eq!(TargetType::Int8.read(&view, 1, Some("-3")).expect("int8 overflow"), json!(-3));
		assert_eq!(TargetType::Double.read(&view, 1, None).expect("double"), json!(200.0));
		assert_eq!(TargetType::String.read(&view, 0, None).expect("string"), json!("7"));
		assert_eq!(TargetType::Bool.read(&view, 0, None).expect("bool"), json!(true));
		assert_eq!(TargetType::Uint2.read(&view, 0, None).expect("uint2"), json!([7, 7]));
		assert_eq!(TargetType::Uint64.read(&view, 9, Some("42")).expect("out of range"), json!(42));
	}

	#[test]
	fn rejects_unconvertible_default_text() {
		let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Uint8), 0);
		let view = PropertyView::new(&descriptor, PropertyBuffers::values(&[]));

		let err = TargetType::Uint8.read(&view, 0, Some("300")).expect_err("default out of range");
		assert!(matches!(err, CliError::InvalidDefault { target: "uint8", .. }));
		assert_eq!(TargetType::Float2.read(&view, 0, Some("(1.5, -2)")).expect("vec2 default"), json!([1.5, -2.0]));
	}
}
