//! Typed value access for glTF `EXT_structural_metadata` property table properties.

/// Property descriptors, buffer decoding, transforms, and typed conversion.
pub mod metadata;
