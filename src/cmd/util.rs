use std::path::Path;

use shapemap::shape::Result;

/// Load and parse a JSON document from disk.
pub(crate) fn load_json(path: &Path) -> Result<serde_json::Value> {
	let bytes = std::fs::read(path)?;
	Ok(serde_json::from_slice(&bytes)?)
}
