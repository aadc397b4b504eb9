/// Property document loading.
pub mod document;
/// Per-feature listing command.
pub mod dump;
/// CLI error type.
pub mod error;
/// Single-feature typed read command.
pub mod get;
/// Property summary command.
pub mod info;
/// Conversion target selection.
pub mod target;
#[cfg(test)]
mod test_support;
/// Shared output helpers.
pub mod util;
