/// Storage width and signedness of a numeric component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
	/// Signed 8-bit integer.
	Int8,
	/// Unsigned 8-bit integer.
	Uint8,
	/// Signed 16-bit integer.
	Int16,
	/// Unsigned 16-bit integer.
	Uint16,
	/// Signed 32-bit integer.
	Int32,
	/// Unsigned 32-bit integer.
	Uint32,
	/// Signed 64-bit integer.
	Int64,
	/// Unsigned 64-bit integer.
	Uint64,
	/// IEEE-754 single precision float.
	Float32,
	/// IEEE-754 double precision float.
	Float64,
}

impl ComponentType {
	/// Size of one component in bytes.
	pub fn byte_size(self) -> usize {
		match self {
			Self::Int8 | Self::Uint8 => 1,
			Self::Int16 | Self::Uint16 => 2,
			Self::Int32 | Self::Uint32 | Self::Float32 => 4,
			Self::Int64 | Self::Uint64 | Self::Float64 => 8,
		}
	}

	/// True for the eight integer kinds.
	pub fn is_integer(self) -> bool {
		!self.is_float()
	}

	/// True for `Float32` and `Float64`.
	pub fn is_float(self) -> bool {
		matches!(self, Self::Float32 | Self::Float64)
	}

	/// True for signed integers and floats.
	pub fn is_signed(self) -> bool {
		!matches!(self, Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64)
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Int8 => "int8",
			Self::Uint8 => "uint8",
			Self::Int16 => "int16",
			Self::Uint16 => "uint16",
			Self::Int32 => "int32",
			Self::Uint32 => "uint32",
			Self::Int64 => "int64",
			Self::Uint64 => "uint64",
			Self::Float32 => "float32",
			Self::Float64 => "float64",
		}
	}

	/// Parse a glTF `componentType` name such as `UINT8` or `FLOAT32`.
	pub fn from_gltf_name(name: &str) -> Option<Self> {
		Some(match name {
			"INT8" => Self::Int8,
			"UINT8" => Self::Uint8,
			"INT16" => Self::Int16,
			"UINT16" => Self::Uint16,
			"INT32" => Self::Int32,
			"UINT32" => Self::Uint32,
			"INT64" => Self::Int64,
			"UINT64" => Self::Uint64,
			"FLOAT32" => Self::Float32,
			"FLOAT64" => Self::Float64,
			_ => return None,
		})
	}
}

/// Shape of one property element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
	/// Single numeric component.
	Scalar,
	/// Two numeric components.
	Vec2,
	/// Three numeric components.
	Vec3,
	/// Four numeric components.
	Vec4,
	/// 2x2 numeric matrix.
	Mat2,
	/// 3x3 numeric matrix.
	Mat3,
	/// 4x4 numeric matrix.
	Mat4,
	/// Bit-packed boolean.
	Boolean,
	/// UTF-8 string.
	String,
}

impl ElementType {
	/// Number of numeric components, `0` for boolean and string.
	pub fn component_count(self) -> usize {
		match self {
			Self::Scalar => 1,
			Self::Vec2 => 2,
			Self::Vec3 => 3,
			Self::Vec4 | Self::Mat2 => 4,
			Self::Mat3 => 9,
			Self::Mat4 => 16,
			Self::Boolean | Self::String => 0,
		}
	}

	/// True for element types that carry a component type.
	pub fn is_numeric(self) -> bool {
		self.component_count() > 0
	}

	/// Parse a glTF `type` name such as `SCALAR` or `VEC2`.
	pub fn from_gltf_name(name: &str) -> Option<Self> {
		Some(match name {
			"SCALAR" => Self::Scalar,
			"VEC2" => Self::Vec2,
			"VEC3" => Self::Vec3,
			"VEC4" => Self::Vec4,
			"MAT2" => Self::Mat2,
			"MAT3" => Self::Mat3,
			"MAT4" => Self::Mat4,
			"BOOLEAN" => Self::Boolean,
			"STRING" => Self::String,
			_ => return None,
		})
	}
}

/// Full declared type of a property: element shape, component storage, array-ness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueType {
	/// Element shape.
	pub element: ElementType,
	/// Component storage, present only for numeric element types.
	pub component: Option<ComponentType>,
	/// Whether each feature holds an array of elements.
	pub is_array: bool,
}

impl ValueType {
	/// Numeric scalar of the given component type.
	pub fn scalar(component: ComponentType) -> Self {
		Self {
			element: ElementType::Scalar,
			component: Some(component),
			is_array: false,
		}
	}

	/// Two-component vector of the given component type.
	pub fn vec2(component: ComponentType) -> Self {
		Self {
			element: ElementType::Vec2,
			component: Some(component),
			is_array: false,
		}
	}

	/// Bit-packed boolean.
	pub fn boolean() -> Self {
		Self {
			element: ElementType::Boolean,
			component: None,
			is_array: false,
		}
	}

	/// UTF-8 string.
	pub fn string() -> Self {
		Self {
			element: ElementType::String,
			component: None,
			is_array: false,
		}
	}

	/// Bytes used by one non-array element, `None` for bit-packed and variable-size types.
	pub fn element_byte_size(self) -> Option<usize> {
		let component = self.component?;
		Some(component.byte_size() * self.element.component_count())
	}

	/// Human-readable label such as `vec2<float32>` or `string[]`.
	pub fn label(self) -> String {
		let base = match (self.element, self.component) {
			(ElementType::Boolean, _) => "boolean".to_owned(),
			(ElementType::String, _) => "string".to_owned(),
			(ElementType::Scalar, Some(component)) => component.as_str().to_owned(),
			(element, Some(component)) => format!("{}<{}>", format!("{element:?}").to_lowercase(), component.as_str()),
			(element, None) => format!("{element:?}").to_lowercase(),
		};
		if self.is_array { format!("{base}[]") } else { base }
	}
}

#[cfg(test)]
mod tests;
