use crate::metadata::{ComponentType, ElementType, ValueType};

#[test]
fn parses_gltf_component_names() {
	assert_eq!(ComponentType::from_gltf_name("UINT8"), Some(ComponentType::Uint8));
	assert_eq!(ComponentType::from_gltf_name("FLOAT64"), Some(ComponentType::Float64));
	assert_eq!(ComponentType::from_gltf_name("uint8"), None);
	assert_eq!(ComponentType::from_gltf_name("FLOAT16"), None);
}

#[test]
fn parses_gltf_element_names() {
	assert_eq!(ElementType::from_gltf_name("SCALAR"), Some(ElementType::Scalar));
	assert_eq!(ElementType::from_gltf_name("VEC2"), Some(ElementType::Vec2));
	assert_eq!(ElementType::from_gltf_name("MAT4"), Some(ElementType::Mat4));
	assert_eq!(ElementType::from_gltf_name("ENUM"), None);
}

#[test]
fn component_classification() {
	assert!(ComponentType::Int64.is_integer());
	assert!(ComponentType::Int64.is_signed());
	assert!(!ComponentType::Uint16.is_signed());
	assert!(ComponentType::Float32.is_float());
	assert!(ComponentType::Float32.is_signed());
	assert_eq!(ComponentType::Uint16.byte_size(), 2);
	assert_eq!(ComponentType::Float64.byte_size(), 8);
}

#[test]
fn element_sizes_follow_component_count() {
	assert_eq!(ValueType::scalar(ComponentType::Int32).element_byte_size(), Some(4));
	assert_eq!(ValueType::vec2(ComponentType::Uint16).element_byte_size(), Some(4));
	assert_eq!(ValueType::boolean().element_byte_size(), None);
	assert_eq!(ValueType::string().element_byte_size(), None);
}

#[test]
fn labels_are_stable() {
	assert_eq!(ValueType::scalar(ComponentType::Uint8).label(), "uint8");
	assert_eq!(ValueType::vec2(ComponentType::Float32).label(), "vec2<float32>");
	let array = ValueType {
		is_array: true,
		..ValueType::string()
	};
	assert_eq!(array.label(), "string[]");
}
