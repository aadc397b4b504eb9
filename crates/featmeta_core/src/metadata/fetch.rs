use crate::metadata::bytes::Cursor;
use crate::metadata::{ComponentType, ElementType, MetadataValue, PropertyDescriptor, PropertyError, Result, Vec2Value};

/// Integer width of entries in a string-offsets buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetType {
	/// 8-bit offsets.
	Uint8,
	/// 16-bit offsets.
	Uint16,
	/// 32-bit offsets.
	#[default]
	Uint32,
	/// 64-bit offsets.
	Uint64,
}

impl OffsetType {
	/// Size of one offset in bytes.
	pub fn byte_size(self) -> usize {
		match self {
			Self::Uint8 => 1,
			Self::Uint16 => 2,
			Self::Uint32 => 4,
			Self::Uint64 => 8,
		}
	}

	/// Parse a glTF `stringOffsetType` name.
	pub fn from_gltf_name(name: &str) -> Option<Self> {
		Some(match name {
			"UINT8" => Self::Uint8,
			"UINT16" => Self::Uint16,
			"UINT32" => Self::Uint32,
			"UINT64" => Self::Uint64,
			_ => return None,
		})
	}

	fn read(self, cursor: &mut Cursor<'_>) -> Option<u64> {
		match self {
			Self::Uint8 => cursor.read_u8().map(u64::from),
			Self::Uint16 => cursor.read_u16().map(u64::from),
			Self::Uint32 => cursor.read_u32().map(u64::from),
			Self::Uint64 => cursor.read_u64(),
		}
	}
}

/// Borrowed binary data backing one property.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyBuffers<'a> {
	/// Packed values; `None` when the property has no data in this table.
	pub values: Option<&'a [u8]>,
	/// `count + 1` string offsets for string properties.
	pub string_offsets: Option<&'a [u8]>,
	/// Width of each string offset.
	pub string_offset_type: OffsetType,
}

impl<'a> PropertyBuffers<'a> {
	/// Buffers for a fixed-size or bit-packed property.
	pub fn values(values: &'a [u8]) -> Self {
		Self {
			values: Some(values),
			..Self::default()
		}
	}

	/// Buffers for a string property.
	pub fn strings(values: &'a [u8], string_offsets: &'a [u8], string_offset_type: OffsetType) -> Self {
		Self {
			values: Some(values),
			string_offsets: Some(string_offsets),
			string_offset_type,
		}
	}

	/// Check that the buffers hold `descriptor.count` well-formed elements.
	pub fn validate(&self, descriptor: &PropertyDescriptor) -> Result<()> {
		let values = self.values.ok_or(PropertyError::MissingValues)?;
		let count = descriptor.count;

		match descriptor.value_type.element {
			ElementType::Boolean => ensure_len(values, count.div_ceil(8)),
			ElementType::String => self.validate_string_offsets(values, count),
			_ => {
				let size = descriptor.value_type.element_byte_size().unwrap_or(0) as u64;
				ensure_len(values, count.saturating_mul(size))
			}
		}
	}

	fn validate_string_offsets(&self, values: &[u8], count: u64) -> Result<()> {
		let offsets = self.string_offsets.ok_or(PropertyError::MissingStringOffsets)?;
		let width = self.string_offset_type.byte_size() as u64;
		let need = count.saturating_add(1).saturating_mul(width);
		ensure_len(offsets, need)?;

		let mut cursor = Cursor::new(offsets);
		let mut previous = 0_u64;
		for index in 0..=count {
			let Some(offset) = self.string_offset_type.read(&mut cursor) else {
				return Err(PropertyError::BufferTooSmall { need, have: offsets.len() });
			};
			if offset < previous {
				return Err(PropertyError::StringOffsetsOutOfOrder { index });
			}
			previous = offset;
		}

		if previous > values.len() as u64 {
			return Err(PropertyError::StringOffsetOutOfBounds {
				offset: previous,
				len: values.len(),
			});
		}
		Ok(())
	}
}

fn ensure_len(bytes: &[u8], need: u64) -> Result<()> {
	if (bytes.len() as u64) < need {
		return Err(PropertyError::BufferTooSmall { need, have: bytes.len() });
	}
	Ok(())
}

/// Decode the storage value of one feature. No transform or no-data handling is applied.
///
/// Returns [`MetadataValue::Empty`] when the index or the bytes it points at are out of range.
pub fn fetch_raw(descriptor: &PropertyDescriptor, buffers: &PropertyBuffers<'_>, index: u64) -> MetadataValue {
	if index >= descriptor.count {
		return MetadataValue::Empty;
	}
	let Some(values) = buffers.values else {
		return MetadataValue::Empty;
	};

	let value_type = descriptor.value_type;
	let decoded = match (value_type.element, value_type.component) {
		(ElementType::Boolean, _) => fetch_bool(values, index),
		(ElementType::String, _) => fetch_string(values, buffers, index),
		(ElementType::Scalar, Some(component)) => element_cursor(values, index, component.byte_size()).and_then(|mut cursor| read_scalar(&mut cursor, component)),
		(ElementType::Vec2, Some(component)) => element_cursor(values, index, component.byte_size() * 2).and_then(|mut cursor| read_vec2(&mut cursor, component)),
		_ => None,
	};
	decoded.unwrap_or(MetadataValue::Empty)
}

fn element_cursor(values: &[u8], index: u64, size: usize) -> Option<Cursor<'_>> {
	let start = usize::try_from(index).ok()?.checked_mul(size)?;
	Some(Cursor::at(values, start))
}

fn fetch_bool(values: &[u8], index: u64) -> Option<MetadataValue> {
	let byte = values.get(usize::try_from(index / 8).ok()?)?;
	Some(MetadataValue::Bool((byte >> (index % 8)) & 1 == 1))
}

fn fetch_string(values: &[u8], buffers: &PropertyBuffers<'_>, index: u64) -> Option<MetadataValue> {
	let offsets = buffers.string_offsets?;
	let width = buffers.string_offset_type.byte_size();
	let mut cursor = element_cursor(offsets, index, width)?;
	let start = usize::try_from(buffers.string_offset_type.read(&mut cursor)?).ok()?;
	let end = usize::try_from(buffers.string_offset_type.read(&mut cursor)?).ok()?;

	let text = std::str::from_utf8(values.get(start..end)?).ok()?;
	Some(MetadataValue::String(text.into()))
}

fn read_scalar(cursor: &mut Cursor<'_>, component: ComponentType) -> Option<MetadataValue> {
	Some(match component {
		ComponentType::Int8 => MetadataValue::Int8(cursor.read_i8()?),
		ComponentType::Uint8 => MetadataValue::Uint8(cursor.read_u8()?),
		ComponentType::Int16 => MetadataValue::Int16(cursor.read_i16()?),
		ComponentType::Uint16 => MetadataValue::Uint16(cursor.read_u16()?),
		ComponentType::Int32 => MetadataValue::Int32(cursor.read_i32()?),
		ComponentType::Uint32 => MetadataValue::Uint32(cursor.read_u32()?),
		ComponentType::Int64 => MetadataValue::Int64(cursor.read_i64()?),
		ComponentType::Uint64 => MetadataValue::Uint64(cursor.read_u64()?),
		ComponentType::Float32 => MetadataValue::Float32(cursor.read_f32()?),
		ComponentType::Float64 => MetadataValue::Float64(cursor.read_f64()?),
	})
}

fn read_vec2(cursor: &mut Cursor<'_>, component: ComponentType) -> Option<MetadataValue> {
	let vec = match component {
		ComponentType::Int8 => Vec2Value::Int8([cursor.read_i8()?, cursor.read_i8()?]),
		ComponentType::Uint8 => Vec2Value::Uint8([cursor.read_u8()?, cursor.read_u8()?]),
		ComponentType::Int16 => Vec2Value::Int16([cursor.read_i16()?, cursor.read_i16()?]),
		ComponentType::Uint16 => Vec2Value::Uint16([cursor.read_u16()?, cursor.read_u16()?]),
		ComponentType::Int32 => Vec2Value::Int32([cursor.read_i32()?, cursor.read_i32()?]),
		ComponentType::Uint32 => Vec2Value::Uint32([cursor.read_u32()?, cursor.read_u32()?]),
		ComponentType::Int64 => Vec2Value::Int64([cursor.read_i64()?, cursor.read_i64()?]),
		ComponentType::Uint64 => Vec2Value::Uint64([cursor.read_u64()?, cursor.read_u64()?]),
		ComponentType::Float32 => Vec2Value::Float32([cursor.read_f32()?, cursor.read_f32()?]),
		ComponentType::Float64 => Vec2Value::Float64([cursor.read_f64()?, cursor.read_f64()?]),
	};
	Some(MetadataValue::Vec2(vec))
}
