mod error;
mod flatten;
mod mapping;
mod render;
mod store;
mod value;
mod zero;

/// Error and result aliases.
pub use error::{Result, ShapeError};
/// Flattening entry points, options, and policies.
pub use flatten::{CyclePolicy, FlattenOptions, OpaquePolicy, flatten, flatten_ref};
/// Flattened snapshot types.
pub use mapping::{FlatValue, Mapping};
/// Text rendering of flattened snapshots.
pub use render::{RenderOptions, render_mapping};
/// Reference arena for indirection handles.
pub use store::RefIndex;
/// Runtime value model.
pub use value::{FieldValue, RecordValue, Value};
/// Structural zero predicate.
pub use zero::is_zero;
