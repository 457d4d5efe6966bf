/// JSON document flattening command.
pub mod flatten;
/// Shared CLI helpers.
pub mod util;
/// Structural zero-check command.
pub mod zero;
