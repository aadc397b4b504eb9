use std::path::PathBuf;

use featmeta::metadata::PropertyError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
	/// Property document could not be read.
	#[error("io: {path}: {source}")]
	Io {
		/// Document path.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Property document is not valid JSON or has the wrong shape.
	#[error("json: {path}: {source}")]
	Json {
		/// Document path.
		path: PathBuf,
		/// Underlying parse failure.
		#[source]
		source: serde_json::Error,
	},
	/// Output could not be serialized.
	#[error("serialize: {0}")]
	Serialize(#[from] serde_json::Error),
	/// Unknown glTF `type` name.
	#[error("unknown element type {name:?}")]
	UnknownElementType {
		/// Name found in the document.
		name: String,
	},
	/// Unknown glTF `componentType` name.
	#[error("unknown component type {name:?}")]
	UnknownComponentType {
		/// Name found in the document.
		name: String,
	},
	/// Unknown glTF `stringOffsetType` name.
	#[error("unknown string offset type {name:?}")]
	UnknownOffsetType {
		/// Name found in the document.
		name: String,
	},
	/// A document field does not fit the declared property type.
	#[error("{field}: expected {expected}, got {got}")]
	InvalidField {
		/// Field path, e.g. `values[3]` or `noData`.
		field: String,
		/// Expected kind label.
		expected: String,
		/// Offending JSON text.
		got: String,
	},
	/// `values` length differs from `count`.
	#[error("values has {actual} entries, count is {count}")]
	CountMismatch {
		/// Declared feature count.
		count: u64,
		/// Number of entries in `values`.
		actual: usize,
	},
	/// `--default` text does not convert to the requested type.
	#[error("default {value:?} does not convert to {target}")]
	InvalidDefault {
		/// Text given on the command line.
		value: String,
		/// Requested target type name.
		target: &'static str,
	},
	/// Property construction or encoding failed.
	#[error(transparent)]
	Property(#[from] PropertyError),
}
