use crate::metadata::{ComponentType, ElementType, PropertyDescriptor, PropertyError, PropertyStatus, ValueType};

#[test]
fn plain_scalar_validates() {
	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Uint8), 4)
		.with_no_data(255_u8)
		.with_default(10_u8);
	descriptor.validate().expect("descriptor is valid");
	assert!(!descriptor.is_transformable());
}

#[test]
fn normalized_integer_accepts_float_operands() {
	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Uint8), 1)
		.normalized(true)
		.with_offset(0.0_f64)
		.with_scale(2.0_f64)
		.with_bounds(0.0_f64, 2.0_f64);
	descriptor.validate().expect("descriptor is valid");
	assert!(descriptor.is_transformable());
}

#[test]
fn vec2_accepts_vector_and_scalar_operands() {
	let descriptor = PropertyDescriptor::new(ValueType::vec2(ComponentType::Float32), 1)
		.with_offset([1.0_f32, 2.0])
		.with_scale(0.5_f32);
	descriptor.validate().expect("descriptor is valid");
}

#[test]
fn rejects_operands_on_plain_integers() {
	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Int32), 1).with_scale(2.0_f64);
	let err = descriptor.validate().expect_err("scale on integer should fail");
	assert!(matches!(err, PropertyError::OperandNotAllowed { field: "scale" }));
	assert_eq!(err.status(), PropertyStatus::ErrorInvalidProperty);
}

#[test]
fn rejects_integer_operand_values() {
	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Float32), 1).with_offset(1_i32);
	let err = descriptor.validate().expect_err("integer offset should fail");
	assert!(matches!(err, PropertyError::OperandKindMismatch { field: "offset", .. }));
}

#[test]
fn rejects_vector_operand_on_scalar() {
	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Float64), 1).with_scale([1.0_f64, 1.0]);
	assert!(matches!(descriptor.validate(), Err(PropertyError::OperandKindMismatch { field: "scale", .. })));
}

#[test]
fn rejects_normalized_float() {
	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Float32), 1).normalized(true);
	assert_eq!(descriptor.validate(), Err(PropertyError::NormalizedNonInteger));
}

#[test]
fn rejects_no_data_on_boolean() {
	let descriptor = PropertyDescriptor::new(ValueType::boolean(), 1).with_no_data(false);
	assert_eq!(descriptor.validate(), Err(PropertyError::NoDataOnBoolean));
}

#[test]
fn rejects_no_data_of_wrong_storage_kind() {
	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Uint8), 1).with_no_data(255_u16);
	assert!(matches!(descriptor.validate(), Err(PropertyError::OperandKindMismatch { field: "noData", .. })));

	let descriptor = PropertyDescriptor::new(ValueType::string(), 1).with_no_data("n/a");
	descriptor.validate().expect("string sentinel is valid");
}

#[test]
fn rejects_unsupported_shapes() {
	let vec3 = ValueType {
		element: ElementType::Vec3,
		component: Some(ComponentType::Float32),
		is_array: false,
	};
	assert_eq!(
		PropertyDescriptor::new(vec3, 1).validate(),
		Err(PropertyError::UnsupportedElementType { element: ElementType::Vec3 })
	);

	let array = ValueType {
		is_array: true,
		..ValueType::scalar(ComponentType::Int8)
	};
	let mut descriptor = PropertyDescriptor::new(array, 1);
	descriptor.array_size = 3;
	assert_eq!(descriptor.validate(), Err(PropertyError::ArrayProperty { array_size: 3 }));

	let missing_component = ValueType {
		element: ElementType::Scalar,
		component: None,
		is_array: false,
	};
	assert!(matches!(
		PropertyDescriptor::new(missing_component, 1).validate(),
		Err(PropertyError::ComponentTypeMismatch { .. })
	));
}

#[test]
fn rejects_default_of_another_integer_kind() {
	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Uint8), 2)
		.normalized(true)
		.with_no_data(0_u8)
		.with_default(300_i64);
	let err = descriptor.validate().expect_err("int64 default on uint8 should fail");
	assert_eq!(
		err,
		PropertyError::OperandKindMismatch {
			field: "default",
			expected: "uint8".to_owned(),
			got: "int64".to_owned(),
		}
	);

	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Uint8), 2).normalized(true).with_default(255_u16);
	assert!(matches!(descriptor.validate(), Err(PropertyError::OperandKindMismatch { field: "default", .. })));
}

#[test]
fn transformable_default_may_be_float_of_same_shape() {
	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Uint8), 1).normalized(true).with_default(0.5_f64);
	descriptor.validate().expect("float default on normalized uint8 is valid");

	let descriptor = PropertyDescriptor::new(ValueType::vec2(ComponentType::Int16), 1).normalized(true).with_default([0.5_f32, 1.0]);
	descriptor.validate().expect("float vec2 default on normalized vec2 is valid");

	let descriptor = PropertyDescriptor::new(ValueType::vec2(ComponentType::Int16), 1).normalized(true).with_default(0.5_f64);
	assert!(matches!(descriptor.validate(), Err(PropertyError::OperandKindMismatch { field: "default", .. })));

	let descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Int32), 1).with_default(1.0_f32);
	assert!(matches!(descriptor.validate(), Err(PropertyError::OperandKindMismatch { field: "default", .. })));
}

#[test]
fn boolean_and_string_defaults_match_their_element() {
	PropertyDescriptor::new(ValueType::boolean(), 1).with_default(true).validate().expect("bool default is valid");
	PropertyDescriptor::new(ValueType::string(), 1).with_default("none").validate().expect("string default is valid");

	let descriptor = PropertyDescriptor::new(ValueType::boolean(), 1).with_default(1_u8);
	assert!(matches!(descriptor.validate(), Err(PropertyError::OperandKindMismatch { field: "default", .. })));
}

#[test]
fn rejects_array_size_on_non_array_type() {
	let mut descriptor = PropertyDescriptor::new(ValueType::scalar(ComponentType::Float32), 1);
	descriptor.array_size = 4;
	assert_eq!(descriptor.validate(), Err(PropertyError::ArrayProperty { array_size: 4 }));
}
