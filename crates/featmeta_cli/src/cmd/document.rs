use std::fs;
use std::path::Path;

use featmeta::metadata::{
	ComponentType, ElementType, MetadataValue, OffsetType, OwnedBuffers, PropertyDescriptor, PropertyView, ValueType, Vec2Value, encode_values,
};
use serde::Deserialize;
use serde_json::Value as Json;

use crate::cmd::error::{CliError, Result};

/// JSON description of one property table property and its per-feature values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropertyDocument {
	/// Optional display name.
	#[serde(default)]
	pub name: Option<String>,
	/// glTF element type name (`SCALAR`, `VEC2`, `BOOLEAN`, `STRING`, ...).
	#[serde(rename = "type")]
	pub element: String,
	/// glTF component type name for numeric element types.
	#[serde(default)]
	pub component_type: Option<String>,
	/// Whether each feature holds an array.
	#[serde(default)]
	pub array: bool,
	/// Fixed array length for array properties.
	#[serde(default)]
	pub array_size: u64,
	/// Number of features.
	pub count: u64,
	/// Normalize integer components.
	#[serde(default)]
	pub normalized: bool,
	/// Offset operand.
	#[serde(default)]
	pub offset: Option<Json>,
	/// Scale operand.
	#[serde(default)]
	pub scale: Option<Json>,
	/// Declared minimum.
	#[serde(default)]
	pub min: Option<Json>,
	/// Declared maximum.
	#[serde(default)]
	pub max: Option<Json>,
	/// No-data sentinel in storage kind.
	#[serde(default)]
	pub no_data: Option<Json>,
	/// Property default value.
	#[serde(default)]
	pub default: Option<Json>,
	/// One entry per feature; absent when the property has no data.
	#[serde(default)]
	pub values: Option<Vec<Json>>,
	/// glTF string offset type name, `UINT32` when absent.
	#[serde(default)]
	pub string_offset_type: Option<String>,
}

/// Descriptor and encoded buffers built from a [`PropertyDocument`].
#[derive(Debug)]
pub struct LoadedProperty {
	/// Display name.
	pub name: Option<String>,
	/// Property descriptor.
	pub descriptor: PropertyDescriptor,
	/// Encoded values, `None` for properties without data.
	pub buffers: Option<OwnedBuffers>,
}

impl LoadedProperty {
	/// Build an accessor over the loaded property.
	pub fn view(&self) -> PropertyView<'_> {
		let buffers = self.buffers.as_ref().map(OwnedBuffers::as_buffers).unwrap_or_default();
		PropertyView::new(&self.descriptor, buffers)
	}
}

/// Read and build a property document from disk.
pub fn load(path: &Path) -> Result<LoadedProperty> {
	let bytes = fs::read(path).map_err(|source| CliError::Io {
		path: path.to_owned(),
		source,
	})?;
	let document: PropertyDocument = serde_json::from_slice(&bytes).map_err(|source| CliError::Json {
		path: path.to_owned(),
		source,
	})?;
	document.build()
}

impl PropertyDocument {
	/// Translate the document into a descriptor and glTF-layout buffers.
	pub fn build(self) -> Result<LoadedProperty> {
		let value_type = self.value_type()?;
		let string_offset_type = match &self.string_offset_type {
			Some(name) => OffsetType::from_gltf_name(name).ok_or_else(|| CliError::UnknownOffsetType { name: name.clone() })?,
			None => OffsetType::default(),
		};

		let mut descriptor = PropertyDescriptor::new(value_type, self.count).normalized(self.normalized);
		descriptor.array_size = self.array_size;

		let operand_component = if self.normalized { Some(ComponentType::Float64) } else { value_type.component };
		descriptor.offset = operand(&self.offset, "offset", value_type, operand_component)?;
		descriptor.scale = operand(&self.scale, "scale", value_type, operand_component)?;
		descriptor.min = operand(&self.min, "min", value_type, operand_component)?;
		descriptor.max = operand(&self.max, "max", value_type, operand_component)?;
		descriptor.no_data = self.no_data.as_ref().map(|json| storage_value(json, "noData", value_type)).transpose()?;
		descriptor.default_value = self
			.default
			.as_ref()
			.map(|json| default_value(json, &descriptor))
			.transpose()?;

		let buffers = match &self.values {
			Some(values) => {
				if values.len() as u64 != self.count {
					return Err(CliError::CountMismatch {
						count: self.count,
						actual: values.len(),
					});
				}
				let typed = values
					.iter()
					.enumerate()
					.map(|(index, json)| storage_value(json, &format!("values[{index}]"), value_type))
					.collect::<Result<Vec<_>>>()?;
				Some(encode_values(value_type, &typed, string_offset_type)?)
			}
			None => None,
		};

		Ok(LoadedProperty {
			name: self.name,
			descriptor,
			buffers,
		})
	}

	fn value_type(&self) -> Result<ValueType> {
		let element = ElementType::from_gltf_name(&self.element).ok_or_else(|| CliError::UnknownElementType { name: self.element.clone() })?;
		let component = self
			.component_type
			.as_deref()
			.map(|name| ComponentType::from_gltf_name(name).ok_or_else(|| CliError::UnknownComponentType { name: name.to_owned() }))
			.transpose()?;

		Ok(ValueType {
			element,
			component,
			is_array: self.array,
		})
	}
}

fn operand(json: &Option<Json>, field: &str, value_type: ValueType, component: Option<ComponentType>) -> Result<Option<MetadataValue>> {
	let Some(json) = json else {
		return Ok(None);
	};
	let component = component.filter(|item| item.is_float()).unwrap_or(ComponentType::Float64);
	let shaped = ValueType {
		component: Some(component),
		..value_type
	};

	let value = match (value_type.element, json) {
		(ElementType::Vec2, Json::Array(_)) => storage_value(json, field, ValueType::vec2(component))?,
		_ => storage_value(json, field, ValueType::scalar(component)).map_err(|_| invalid(field, shaped, json))?,
	};
	Ok(Some(value))
}

/// Convert one JSON value into the exact storage kind of `value_type`.
pub fn storage_value(json: &Json, field: &str, value_type: ValueType) -> Result<MetadataValue> {
	let value = match (value_type.element, value_type.component) {
		(ElementType::Boolean, _) => json.as_bool().map(MetadataValue::Bool),
		(ElementType::String, _) => json.as_str().map(MetadataValue::from),
		(ElementType::Scalar, Some(component)) => json_component(component, json),
		(ElementType::Vec2, Some(component)) => match json.as_array().map(Vec::as_slice) {
			Some([x, y]) => json_component(component, x).zip(json_component(component, y)).and_then(|(x, y)| pair(x, y)),
			_ => None,
		},
		_ => None,
	};
	value.ok_or_else(|| invalid(field, value_type, json))
}

fn invalid(field: &str, value_type: ValueType, json: &Json) -> CliError {
	CliError::InvalidField {
		field: field.to_owned(),
		expected: value_type.label(),
		got: json.to_string(),
	}
}

fn json_component(component: ComponentType, json: &Json) -> Option<MetadataValue> {
	if component.is_float() {
		let value = json.as_f64()?;
		return match component {
			ComponentType::Float32 if value.abs() > f64::from(f32::MAX) => None,
			ComponentType::Float32 => Some(MetadataValue::Float32(value as f32)),
			_ => Some(MetadataValue::Float64(value)),
		};
	}

	let wide = json.as_i64().map(i128::from).or_else(|| json.as_u64().map(i128::from))?;
	Some(match component {
		ComponentType::Int8 => MetadataValue::Int8(i8::try_from(wide).ok()?),
		ComponentType::Uint8 => MetadataValue::Uint8(u8::try_from(wide).ok()?),
		ComponentType::Int16 => MetadataValue::Int16(i16::try_from(wide).ok()?),
		ComponentType::Uint16 => MetadataValue::Uint16(u16::try_from(wide).ok()?),
		ComponentType::Int32 => MetadataValue::Int32(i32::try_from(wide).ok()?),
		ComponentType::Uint32 => MetadataValue::Uint32(u32::try_from(wide).ok()?),
		ComponentType::Int64 => MetadataValue::Int64(i64::try_from(wide).ok()?),
		ComponentType::Uint64 => MetadataValue::Uint64(u64::try_from(wide).ok()?),
		ComponentType::Float32 | ComponentType::Float64 => return None,
	})
}

fn pair(x: MetadataValue, y: MetadataValue) -> Option<MetadataValue> {
	let vec = match (x, y) {
		(MetadataValue::Int8(x), MetadataValue::Int8(y)) => Vec2Value::Int8([x, y]),
		(MetadataValue::Uint8(x), MetadataValue::Uint8(y)) => Vec2Value::Uint8([x, y]),
		(MetadataValue::Int16(x), MetadataValue::Int16(y)) => Vec2Value::Int16([x, y]),
		(MetadataValue::Uint16(x), MetadataValue::Uint16(y)) => Vec2Value::Uint16([x, y]),
		(MetadataValue::Int32(x), MetadataValue::Int32(y)) => Vec2Value::Int32([x, y]),
		(MetadataValue::Uint32(x), MetadataValue::Uint32(y)) => Vec2Value::Uint32([x, y]),
		(MetadataValue::Int64(x), MetadataValue::Int64(y)) => Vec2Value::Int64([x, y]),
		(MetadataValue::Uint64(x), MetadataValue::Uint64(y)) => Vec2Value::Uint64([x, y]),
		(MetadataValue::Float32(x), MetadataValue::Float32(y)) => Vec2Value::Float32([x, y]),
		(MetadataValue::Float64(x), MetadataValue::Float64(y)) => Vec2Value::Float64([x, y]),
		_ => return None,
	};
	Some(MetadataValue::Vec2(vec))
}

/// Storage kind first; transformable properties also take a double of the same shape.
fn default_value(json: &Json, descriptor: &PropertyDescriptor) -> Result<MetadataValue> {
	let value_type = descriptor.value_type;
	storage_value(json, "default", value_type).or_else(|err| {
		if !descriptor.is_transformable() {
			return Err(err);
		}
		let shaped = ValueType {
			component: Some(ComponentType::Float64),
			..value_type
		};
		storage_value(json, "default", shaped).map_err(|_| err)
	})
}
