use std::collections::HashSet;

use crate::shape::error::{Result, ShapeError};
use crate::shape::mapping::{FlatValue, Mapping};
use crate::shape::store::RefIndex;
use crate::shape::value::{RecordValue, Value};
use crate::shape::zero::is_zero;

/// Handling of non-data shapes met during flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpaquePolicy {
	/// Copy the shape label through into the mapping.
	Keep,
	/// Fail with `UnsupportedShape` naming the field path.
	Error,
}

/// Handling of reference cycles met during flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePolicy {
	/// Drop the offending field and keep its siblings.
	Skip,
	/// Fail with `CycleDetected` naming the field path.
	Error,
}

/// Runtime limits and behavior switches for flattening.
#[derive(Debug, Clone)]
pub struct FlattenOptions {
	/// Maximum recursive record nesting depth.
	pub max_depth: u32,
	/// Handling of non-data shapes.
	pub on_opaque: OpaquePolicy,
	/// Handling of reference cycles.
	pub on_cycle: CyclePolicy,
}

impl Default for FlattenOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			on_opaque: OpaquePolicy::Keep,
			on_cycle: CyclePolicy::Error,
		}
	}
}

/// Flatten a record-shaped value into a field mapping.
///
/// Hidden fields and fields holding their shape's zero value are skipped.
/// Record fields, and reference fields resolving to records, flatten into
/// nested mappings; scalar fields are copied verbatim. A reference at the
/// root is dereferenced first, and the absent reference yields an empty
/// mapping. Any other root shape fails with `NotARecord`.
pub fn flatten(index: &RefIndex, value: &Value, options: &FlattenOptions) -> Result<Mapping> {
	let mut path = Vec::new();
	let mut on_chain = HashSet::new();
	flatten_root(index, value, options, &mut path, &mut on_chain)
}

/// Flatten the record behind a reference handle.
pub fn flatten_ref(index: &RefIndex, ref_id: u64, options: &FlattenOptions) -> Result<Mapping> {
	flatten(index, &Value::Ref(ref_id), options)
}

fn flatten_root<'a>(
	index: &'a RefIndex,
	value: &'a Value,
	options: &FlattenOptions,
	path: &mut Vec<&'a str>,
	on_chain: &mut HashSet<u64>,
) -> Result<Mapping> {
	match value {
		Value::Record(rec) => flatten_record(index, rec, options, path, on_chain, 0),
		Value::Ref(0) => Ok(Mapping::new()),
		Value::Ref(ref_id) => {
			let target = index.resolve(*ref_id).ok_or(ShapeError::UnresolvedRef { ref_id: *ref_id })?;
			if !on_chain.insert(*ref_id) {
				return match options.on_cycle {
					CyclePolicy::Skip => Ok(Mapping::new()),
					CyclePolicy::Error => Err(ShapeError::CycleDetected {
						path: path_label(path),
						ref_id: *ref_id,
					}),
				};
			}
			let out = flatten_root(index, target, options, path, on_chain);
			on_chain.remove(ref_id);
			out
		}
		other => Err(ShapeError::NotARecord { got: other.kind_name() }),
	}
}

fn flatten_record<'a>(
	index: &'a RefIndex,
	rec: &'a RecordValue,
	options: &FlattenOptions,
	path: &mut Vec<&'a str>,
	on_chain: &mut HashSet<u64>,
	depth: u32,
) -> Result<Mapping> {
	if depth >= options.max_depth {
		return Err(ShapeError::DepthExceeded { max_depth: options.max_depth });
	}

	let mut out = Mapping::new();
	for field in &rec.fields {
		if !field.exported || is_zero(index, &field.value) {
			continue;
		}

		path.push(field.name.as_ref());
		let flat = flatten_field(index, &field.value, options, path, on_chain, depth)?;
		path.pop();

		if let Some(flat) = flat {
			out.insert(field.name.clone(), flat);
		}
	}
	Ok(out)
}

// Returns None when the cycle policy dropped the value.
fn flatten_field<'a>(
	index: &'a RefIndex,
	value: &'a Value,
	options: &FlattenOptions,
	path: &mut Vec<&'a str>,
	on_chain: &mut HashSet<u64>,
	depth: u32,
) -> Result<Option<FlatValue>> {
	match value {
		Value::Null => Ok(Some(FlatValue::Null)),
		Value::Bool(v) => Ok(Some(FlatValue::Bool(*v))),
		Value::I64(v) => Ok(Some(FlatValue::I64(*v))),
		Value::U64(v) => Ok(Some(FlatValue::U64(*v))),
		Value::F64(v) => Ok(Some(FlatValue::F64(*v))),
		Value::String(v) => Ok(Some(FlatValue::String(v.clone()))),
		Value::Bytes(v) => Ok(Some(FlatValue::Bytes(v.clone()))),
		Value::List(items) => {
			// Elements are not fields: records inside lists flatten, but
			// zero elements stay.
			let mut out = Vec::with_capacity(items.len());
			for item in items {
				if let Some(flat) = flatten_field(index, item, options, path, on_chain, depth)? {
					out.push(flat);
				}
			}
			Ok(Some(FlatValue::List(out)))
		}
		Value::Record(rec) => Ok(Some(FlatValue::Map(flatten_record(index, rec, options, path, on_chain, depth + 1)?))),
		Value::Ref(0) => Ok(Some(FlatValue::Null)),
		Value::Ref(ref_id) => {
			let target = index.resolve(*ref_id).ok_or(ShapeError::UnresolvedRef { ref_id: *ref_id })?;
			if !on_chain.insert(*ref_id) {
				return match options.on_cycle {
					CyclePolicy::Skip => Ok(None),
					CyclePolicy::Error => Err(ShapeError::CycleDetected {
						path: path_label(path),
						ref_id: *ref_id,
					}),
				};
			}
			let flat = flatten_field(index, target, options, path, on_chain, depth);
			on_chain.remove(ref_id);
			flat
		}
		Value::Opaque(label) => match options.on_opaque {
			OpaquePolicy::Keep => Ok(Some(FlatValue::Opaque(label.clone()))),
			OpaquePolicy::Error => Err(ShapeError::UnsupportedShape {
				path: path_label(path),
				shape: label.to_string(),
			}),
		},
	}
}

fn path_label(path: &[&str]) -> String {
	if path.is_empty() { "<root>".to_owned() } else { path.join(".") }
}
