use crate::metadata::{ElementType, MetadataValue, OffsetType, PropertyBuffers, PropertyError, Result, ValueType};

/// Owned property buffers laid out the way [`PropertyBuffers`] reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedBuffers {
	/// Packed values.
	pub values: Vec<u8>,
	/// String offsets, present for string properties.
	pub string_offsets: Option<Vec<u8>>,
	/// Width of each string offset.
	pub string_offset_type: OffsetType,
}

impl OwnedBuffers {
	/// Borrow as accessor input.
	pub fn as_buffers(&self) -> PropertyBuffers<'_> {
		PropertyBuffers {
			values: Some(&self.values),
			string_offsets: self.string_offsets.as_deref(),
			string_offset_type: self.string_offset_type,
		}
	}
}

/// Encode one value per feature into glTF property table layout.
///
/// Each value must already have the property's storage kind; nothing is converted here.
pub fn encode_values(value_type: ValueType, values: &[MetadataValue], string_offset_type: OffsetType) -> Result<OwnedBuffers> {
	if value_type.is_array {
		return Err(PropertyError::ArrayProperty { array_size: 0 });
	}

	let mut out = OwnedBuffers {
		string_offset_type,
		..OwnedBuffers::default()
	};

	match value_type.element {
		ElementType::Boolean => {
			out.values = vec![0_u8; values.len().div_ceil(8)];
			for (index, value) in values.iter().enumerate() {
				let MetadataValue::Bool(flag) = value else {
					return Err(mismatch(value_type, value));
				};
				if *flag {
					out.values[index / 8] |= 1 << (index % 8);
				}
			}
		}
		ElementType::String => {
			let mut offsets = Vec::with_capacity((values.len() + 1) * string_offset_type.byte_size());
			write_offset(&mut offsets, 0, string_offset_type)?;
			for value in values {
				let MetadataValue::String(text) = value else {
					return Err(mismatch(value_type, value));
				};
				out.values.extend_from_slice(text.as_bytes());
				write_offset(&mut offsets, out.values.len() as u64, string_offset_type)?;
			}
			out.string_offsets = Some(offsets);
		}
		ElementType::Scalar | ElementType::Vec2 => {
			for value in values {
				let fits = value.component_type() == value_type.component && matches!(value, MetadataValue::Vec2(_)) == (value_type.element == ElementType::Vec2);
				if !fits {
					return Err(mismatch(value_type, value));
				}
				write_numeric(&mut out.values, value);
			}
		}
		element => return Err(PropertyError::UnsupportedElementType { element }),
	}

	Ok(out)
}

fn mismatch(value_type: ValueType, value: &MetadataValue) -> PropertyError {
	PropertyError::EncodeKindMismatch {
		expected: value_type.label(),
		got: value.kind_name(),
	}
}

fn write_offset(out: &mut Vec<u8>, offset: u64, offset_type: OffsetType) -> Result<()> {
	let overflow = || PropertyError::EncodeOffsetOverflow { offset, offset_type };
	match offset_type {
		OffsetType::Uint8 => out.push(u8::try_from(offset).map_err(|_| overflow())?),
		OffsetType::Uint16 => out.extend_from_slice(&u16::try_from(offset).map_err(|_| overflow())?.to_le_bytes()),
		OffsetType::Uint32 => out.extend_from_slice(&u32::try_from(offset).map_err(|_| overflow())?.to_le_bytes()),
		OffsetType::Uint64 => out.extend_from_slice(&offset.to_le_bytes()),
	}
	Ok(())
}

fn write_numeric(out: &mut Vec<u8>, value: &MetadataValue) {
	match value {
		MetadataValue::Int8(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Uint8(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Int16(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Uint16(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Int32(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Uint32(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Int64(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Uint64(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Float32(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Float64(v) => out.extend_from_slice(&v.to_le_bytes()),
		MetadataValue::Vec2(vec) => {
			for component in vec.components() {
				write_numeric(out, &component);
			}
		}
		MetadataValue::Empty | MetadataValue::Bool(_) | MetadataValue::String(_) => {}
	}
}
