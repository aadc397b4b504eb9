use thiserror::Error;

use crate::metadata::{ElementType, OffsetType, PropertyStatus};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PropertyError>;

/// Reasons a property cannot be read, detected once when a view is built or buffers are encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
	/// Element type has no accessor support.
	#[error("unsupported element type {element:?}")]
	UnsupportedElementType {
		/// Declared element type.
		element: ElementType,
	},
	/// Numeric element type declared without a component type, or vice versa.
	#[error("component type mismatch for element type {element:?}")]
	ComponentTypeMismatch {
		/// Declared element type.
		element: ElementType,
	},
	/// Fixed or variable-length array properties are not accessible.
	#[error("array properties are not supported (array_size={array_size})")]
	ArrayProperty {
		/// Declared fixed array size, `0` for variable-length arrays.
		array_size: u64,
	},
	/// `normalized` set on a non-integer component type.
	#[error("normalized flag requires an integer component type")]
	NormalizedNonInteger,
	/// Transform or bound operand present on a type that cannot carry it.
	#[error("{field} is only valid for floating-point or normalized integer properties")]
	OperandNotAllowed {
		/// Descriptor field name.
		field: &'static str,
	},
	/// Descriptor operand has a kind that does not fit the property.
	#[error("{field} has kind {got}, expected {expected}")]
	OperandKindMismatch {
		/// Descriptor field name.
		field: &'static str,
		/// Expected value kind label.
		expected: String,
		/// Actual value kind label.
		got: String,
	},
	/// Boolean properties cannot declare a no-data sentinel.
	#[error("boolean properties cannot declare noData")]
	NoDataOnBoolean,
	/// Value buffer is absent and no default exists.
	#[error("property has no values and no default")]
	MissingValues,
	/// Value buffer shorter than `count` elements require.
	#[error("value buffer too small: need={need}, have={have}")]
	BufferTooSmall {
		/// Required number of bytes.
		need: u64,
		/// Available bytes.
		have: usize,
	},
	/// String property without a string-offsets buffer.
	#[error("string property is missing its string offsets buffer")]
	MissingStringOffsets,
	/// String offsets are not monotonically non-decreasing.
	#[error("string offsets out of order at index {index}")]
	StringOffsetsOutOfOrder {
		/// Index of the first decreasing offset.
		index: u64,
	},
	/// Final string offset points past the end of the value buffer.
	#[error("string offset {offset} exceeds value buffer length {len}")]
	StringOffsetOutOfBounds {
		/// Offending offset.
		offset: u64,
		/// Value buffer length.
		len: usize,
	},
	/// Encoder received a value that does not match the property type.
	#[error("cannot encode {got} as {expected}")]
	EncodeKindMismatch {
		/// Expected value kind label.
		expected: String,
		/// Actual value kind label.
		got: String,
	},
	/// Encoded string data outgrew the chosen offset width.
	#[error("string offset {offset} does not fit {offset_type:?}")]
	EncodeOffsetOverflow {
		/// Offset that failed to fit.
		offset: u64,
		/// Chosen offset width.
		offset_type: OffsetType,
	},
}

impl PropertyError {
	/// Property status implied by this error.
	pub fn status(&self) -> PropertyStatus {
		match self {
			Self::MissingValues
			| Self::BufferTooSmall { .. }
			| Self::MissingStringOffsets
			| Self::StringOffsetsOutOfOrder { .. }
			| Self::StringOffsetOutOfBounds { .. } => PropertyStatus::ErrorInvalidPropertyData,
			_ => PropertyStatus::ErrorInvalidProperty,
		}
	}
}
