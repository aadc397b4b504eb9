use crate::metadata::{
	FromMetadataValue, MetadataValue, PropertyBuffers, PropertyDescriptor, PropertyError, Resolved, Result, ValueType, fetch_raw, resolve,
	resolve_default,
};

const LOG_TARGET: &str = "featmeta::view";

/// Readability of a property, decided once when its view is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyStatus {
	/// Values can be read per feature.
	Valid,
	/// No values exist, but every feature reads as the property default.
	EmptyPropertyWithDefault,
	/// The descriptor is malformed or uses an unsupported type.
	ErrorInvalidProperty,
	/// The backing buffers are missing or do not match the descriptor.
	ErrorInvalidPropertyData,
}

impl PropertyStatus {
	/// Stable snake_case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Valid => "valid",
			Self::EmptyPropertyWithDefault => "empty_property_with_default",
			Self::ErrorInvalidProperty => "error_invalid_property",
			Self::ErrorInvalidPropertyData => "error_invalid_property_data",
		}
	}
}

/// Typed per-feature access to one property table property.
///
/// Every accessor is total: failures of any kind yield the caller's default.
#[derive(Debug, Clone)]
pub struct PropertyView<'a> {
	descriptor: &'a PropertyDescriptor,
	buffers: PropertyBuffers<'a>,
	status: PropertyStatus,
	invalid_reason: Option<PropertyError>,
}

impl<'a> PropertyView<'a> {
	/// Validate `descriptor` against `buffers` and build a view.
	pub fn new(descriptor: &'a PropertyDescriptor, buffers: PropertyBuffers<'a>) -> Self {
		let (status, invalid_reason) = match compute_status(descriptor, &buffers) {
			Ok(status) => (status, None),
			Err(err) => {
				log::debug!(target: LOG_TARGET, "{} property is unreadable: {err}", descriptor.value_type.label());
				(err.status(), Some(err))
			}
		};

		Self {
			descriptor,
			buffers,
			status,
			invalid_reason,
		}
	}

	/// Status computed at construction.
	pub fn status(&self) -> PropertyStatus {
		self.status
	}

	/// Why the property is unreadable, when the status is an error.
	pub fn invalid_reason(&self) -> Option<&PropertyError> {
		self.invalid_reason.as_ref()
	}

	/// Underlying descriptor.
	pub fn descriptor(&self) -> &'a PropertyDescriptor {
		self.descriptor
	}

	/// Declared value type.
	pub fn value_type(&self) -> ValueType {
		self.descriptor.value_type
	}

	/// Number of readable features, `0` when the property is in an error state.
	pub fn size(&self) -> u64 {
		match self.status {
			PropertyStatus::Valid | PropertyStatus::EmptyPropertyWithDefault => self.descriptor.count,
			PropertyStatus::ErrorInvalidProperty | PropertyStatus::ErrorInvalidPropertyData => 0,
		}
	}

	/// Declared fixed array size.
	pub fn array_size(&self) -> u64 {
		self.descriptor.array_size
	}

	/// Whether integer values are normalized.
	pub fn is_normalized(&self) -> bool {
		self.descriptor.normalized
	}

	/// Offset operand.
	pub fn offset(&self) -> Option<&'a MetadataValue> {
		self.descriptor.offset.as_ref()
	}

	/// Scale operand.
	pub fn scale(&self) -> Option<&'a MetadataValue> {
		self.descriptor.scale.as_ref()
	}

	/// Declared minimum.
	pub fn min_value(&self) -> Option<&'a MetadataValue> {
		self.descriptor.min.as_ref()
	}

	/// Declared maximum.
	pub fn max_value(&self) -> Option<&'a MetadataValue> {
		self.descriptor.max.as_ref()
	}

	/// No-data sentinel.
	pub fn no_data_value(&self) -> Option<&'a MetadataValue> {
		self.descriptor.no_data.as_ref()
	}

	/// Property default value.
	pub fn default_value(&self) -> Option<&'a MetadataValue> {
		self.descriptor.default_value.as_ref()
	}

	/// Read feature `feature_index` as `T`, or return `default` on any failure.
	pub fn get<T: FromMetadataValue>(&self, feature_index: i64, default: T) -> T {
		match self.resolve_feature(feature_index) {
			Resolved::Value(value) => T::from_metadata_value(&value).unwrap_or_else(|| {
				log::trace!(target: LOG_TARGET, "feature {feature_index}: {} does not convert to {}", value.kind_name(), std::any::type_name::<T>());
				default
			}),
			Resolved::UserDefault => default,
		}
	}

	/// Like [`PropertyView::get`] with the type's zero or empty value as default.
	pub fn get_or_default<T: FromMetadataValue + Default>(&self, feature_index: i64) -> T {
		self.get(feature_index, T::default())
	}

	/// Untransformed storage value, ignoring no-data. `Empty` unless the status is `Valid`.
	pub fn raw_value(&self, feature_index: i64) -> MetadataValue {
		match (self.status, self.feature_index(feature_index)) {
			(PropertyStatus::Valid, Some(index)) => fetch_raw(self.descriptor, &self.buffers, index),
			_ => MetadataValue::Empty,
		}
	}

	/// Value after no-data substitution and transform, or `Empty` where a caller default would apply.
	pub fn value(&self, feature_index: i64) -> MetadataValue {
		match self.resolve_feature(feature_index) {
			Resolved::Value(value) => value,
			Resolved::UserDefault => MetadataValue::Empty,
		}
	}

	/// Every feature rendered as a string, `""` where no string is available.
	pub fn values_as_strings(&self) -> Vec<String> {
		(0..self.size()).map(|index| self.get(index as i64, String::new())).collect()
	}

	fn feature_index(&self, feature_index: i64) -> Option<u64> {
		let index = u64::try_from(feature_index).ok()?;
		(index < self.size()).then_some(index)
	}

	fn resolve_feature(&self, feature_index: i64) -> Resolved {
		let Some(index) = self.feature_index(feature_index) else {
			log::trace!(target: LOG_TARGET, "feature {feature_index} is outside [0, {})", self.size());
			return Resolved::UserDefault;
		};

		match self.status {
			PropertyStatus::Valid => resolve(self.descriptor, fetch_raw(self.descriptor, &self.buffers, index)),
			PropertyStatus::EmptyPropertyWithDefault => resolve_default(self.descriptor),
			PropertyStatus::ErrorInvalidProperty | PropertyStatus::ErrorInvalidPropertyData => Resolved::UserDefault,
		}
	}
}

fn compute_status(descriptor: &PropertyDescriptor, buffers: &PropertyBuffers<'_>) -> Result<PropertyStatus> {
	descriptor.validate()?;

	if buffers.values.is_none() {
		if descriptor.default_value.is_some() {
			return Ok(PropertyStatus::EmptyPropertyWithDefault);
		}
		return Err(PropertyError::MissingValues);
	}

	buffers.validate(descriptor)?;
	Ok(PropertyStatus::Valid)
}
