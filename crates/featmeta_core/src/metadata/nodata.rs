use crate::metadata::{MetadataValue, PropertyDescriptor, apply_transform};

/// Outcome of no-data resolution for one feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
	/// Value to convert, with the transform already applied.
	Value(MetadataValue),
	/// No value is available; the caller's default applies unchanged.
	UserDefault,
}

/// Substitute the property default for no-data sentinels, then apply the transform.
///
/// The sentinel comparison uses the untransformed `raw` value and exact equality.
pub fn resolve(descriptor: &PropertyDescriptor, raw: MetadataValue) -> Resolved {
	if raw.is_empty() {
		return Resolved::UserDefault;
	}

	if descriptor.no_data.as_ref().is_some_and(|no_data| *no_data == raw) {
		return resolve_default(descriptor);
	}

	Resolved::Value(apply_transform(descriptor, raw))
}

/// The transformed property default, or [`Resolved::UserDefault`] when there is none.
pub fn resolve_default(descriptor: &PropertyDescriptor) -> Resolved {
	match &descriptor.default_value {
		Some(default_value) => Resolved::Value(apply_transform(descriptor, default_value.clone())),
		None => Resolved::UserDefault,
	}
}
