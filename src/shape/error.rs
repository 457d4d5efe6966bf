use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Errors produced while flattening, zero-checking, and loading values.
#[derive(Debug, Error)]
pub enum ShapeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON parse or encode failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Flatten root was not record-shaped.
	#[error("flatten input is not record-shaped (got {got})")]
	NotARecord {
		/// Shape kind of the offending value.
		got: &'static str,
	},
	/// Non-zero reference handle missing from the index.
	#[error("unresolved record reference: {ref_id}")]
	UnresolvedRef {
		/// Handle that failed to resolve.
		ref_id: u64,
	},
	/// Reference re-entered its own dereference chain.
	#[error("reference cycle detected at {path} (ref {ref_id})")]
	CycleDetected {
		/// Field path of the offending reference.
		path: String,
		/// Handle participating in the cycle.
		ref_id: u64,
	},
	/// Record nesting exceeded the configured limit.
	#[error("flatten depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Non-data shape met under the error policy.
	#[error("unsupported shape {shape} at {path}")]
	UnsupportedShape {
		/// Field path of the offending value.
		path: String,
		/// Label describing the shape.
		shape: String,
	},
}
