mod bytes;
mod convert;
mod descriptor;
mod encode;
mod error;
mod fetch;
mod nodata;
pub mod parse;
mod transform;
mod value;
mod value_type;
mod view;

/// Typed conversion trait and its target implementations.
pub use convert::FromMetadataValue;
/// Property descriptor supplied by the document parser.
pub use descriptor::PropertyDescriptor;
/// Buffer encoding in property table layout.
pub use encode::{OwnedBuffers, encode_values};
/// Error and result aliases.
pub use error::{PropertyError, Result};
/// Binary buffers and raw per-feature decode.
pub use fetch::{OffsetType, PropertyBuffers, fetch_raw};
/// No-data sentinel and default resolution.
pub use nodata::{Resolved, resolve, resolve_default};
/// Normalization, offset, and scale.
pub use transform::apply_transform;
/// Decoded value types.
pub use value::{MetadataValue, Vec2Value};
/// Declared property type model.
pub use value_type::{ComponentType, ElementType, ValueType};
/// Per-feature accessor and its status.
pub use view::{PropertyStatus, PropertyView};
