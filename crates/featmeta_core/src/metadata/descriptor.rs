use crate::metadata::{ComponentType, ElementType, MetadataValue, PropertyError, Result, ValueType};

/// Immutable description of one property table property, as supplied by the document parser.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
	/// Declared element and component type.
	pub value_type: ValueType,
	/// Number of features (rows) in the owning property table.
	pub count: u64,
	/// Fixed array length, `0` for non-array or variable-length properties.
	pub array_size: u64,
	/// Integer values map to `[0, 1]` or `[-1, 1]` before offset and scale.
	pub normalized: bool,
	/// Added after scaling.
	pub offset: Option<MetadataValue>,
	/// Multiplied before the offset is added.
	pub scale: Option<MetadataValue>,
	/// Declared lower bound of transformed values.
	pub min: Option<MetadataValue>,
	/// Declared upper bound of transformed values.
	pub max: Option<MetadataValue>,
	/// Raw sentinel meaning "no value for this feature".
	pub no_data: Option<MetadataValue>,
	/// Substitute for no-data features and for properties without values.
	pub default_value: Option<MetadataValue>,
}

impl PropertyDescriptor {
	/// Descriptor with no normalization, transform operands, or sentinel.
	pub fn new(value_type: ValueType, count: u64) -> Self {
		Self {
			value_type,
			count,
			array_size: 0,
			normalized: false,
			offset: None,
			scale: None,
			min: None,
			max: None,
			no_data: None,
			default_value: None,
		}
	}

	/// Set the normalized flag.
	pub fn normalized(mut self, normalized: bool) -> Self {
		self.normalized = normalized;
		self
	}

	/// Set the offset operand.
	pub fn with_offset(mut self, offset: impl Into<MetadataValue>) -> Self {
		self.offset = Some(offset.into());
		self
	}

	/// Set the scale operand.
	pub fn with_scale(mut self, scale: impl Into<MetadataValue>) -> Self {
		self.scale = Some(scale.into());
		self
	}

	/// Set the declared bounds.
	pub fn with_bounds(mut self, min: impl Into<MetadataValue>, max: impl Into<MetadataValue>) -> Self {
		self.min = Some(min.into());
		self.max = Some(max.into());
		self
	}

	/// Set the no-data sentinel.
	pub fn with_no_data(mut self, no_data: impl Into<MetadataValue>) -> Self {
		self.no_data = Some(no_data.into());
		self
	}

	/// Set the default value.
	pub fn with_default(mut self, default_value: impl Into<MetadataValue>) -> Self {
		self.default_value = Some(default_value.into());
		self
	}

	/// Whether offset and scale apply: float components, or normalized integers.
	pub fn is_transformable(&self) -> bool {
		match self.value_type.component {
			Some(component) => component.is_float() || (component.is_integer() && self.normalized),
			None => false,
		}
	}

	/// Check the structural invariants the accessor relies on.
	pub fn validate(&self) -> Result<()> {
		let value_type = self.value_type;
		if value_type.is_array || self.array_size != 0 {
			return Err(PropertyError::ArrayProperty { array_size: self.array_size });
		}

		match value_type.element {
			ElementType::Scalar | ElementType::Vec2 | ElementType::Boolean | ElementType::String => {}
			element => return Err(PropertyError::UnsupportedElementType { element }),
		}
		if value_type.element.is_numeric() != value_type.component.is_some() {
			return Err(PropertyError::ComponentTypeMismatch { element: value_type.element });
		}

		if self.normalized && !value_type.component.is_some_and(ComponentType::is_integer) {
			return Err(PropertyError::NormalizedNonInteger);
		}

		let operands = [("offset", &self.offset), ("scale", &self.scale), ("min", &self.min), ("max", &self.max)];
		for (field, operand) in operands {
			let Some(operand) = operand else {
				continue;
			};
			if !self.is_transformable() {
				return Err(PropertyError::OperandNotAllowed { field });
			}
			if !self.fits_operand(operand) {
				return Err(PropertyError::OperandKindMismatch {
					field,
					expected: format!("floating-point {}", value_type.label()),
					got: operand.kind_name(),
				});
			}
		}

		if let Some(no_data) = &self.no_data {
			if value_type.element == ElementType::Boolean {
				return Err(PropertyError::NoDataOnBoolean);
			}
			if !self.fits_storage(no_data) {
				return Err(PropertyError::OperandKindMismatch {
					field: "noData",
					expected: value_type.label(),
					got: no_data.kind_name(),
				});
			}
		}

		if let Some(default_value) = &self.default_value {
			if !self.fits_default(default_value) {
				return Err(PropertyError::OperandKindMismatch {
					field: "default",
					expected: value_type.label(),
					got: default_value.kind_name(),
				});
			}
		}

		Ok(())
	}

	fn fits_operand(&self, operand: &MetadataValue) -> bool {
		let is_float = operand.component_type().is_some_and(ComponentType::is_float);
		match (self.value_type.element, operand) {
			(_, MetadataValue::Vec2(_)) => is_float && self.value_type.element == ElementType::Vec2,
			(ElementType::Scalar | ElementType::Vec2, _) => is_float,
			_ => false,
		}
	}

	/// Storage kind, or for transformable properties a float of the same shape.
	fn fits_default(&self, value: &MetadataValue) -> bool {
		if let (ElementType::Boolean, MetadataValue::Bool(_)) = (self.value_type.element, value) {
			return true;
		}
		if self.fits_storage(value) {
			return true;
		}

		let is_float = value.component_type().is_some_and(ComponentType::is_float);
		let same_shape = matches!(value, MetadataValue::Vec2(_)) == (self.value_type.element == ElementType::Vec2);
		self.is_transformable() && is_float && same_shape
	}

	fn fits_storage(&self, value: &MetadataValue) -> bool {
		match (self.value_type.element, value) {
			(ElementType::String, MetadataValue::String(_)) => true,
			(ElementType::Scalar, MetadataValue::Vec2(_)) => false,
			(ElementType::Scalar, _) | (ElementType::Vec2, MetadataValue::Vec2(_)) => value.component_type() == self.value_type.component,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests;
