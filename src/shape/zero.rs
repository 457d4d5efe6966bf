use std::collections::HashSet;

use crate::shape::store::RefIndex;
use crate::shape::value::Value;

/// Structural zero check for a runtime value.
///
/// A value is zero when it equals its shape's default: false, 0, empty text,
/// empty bytes, empty list, the absent reference, or a record whose fields
/// (exported or not) are all zero. The check recurses through resolved
/// references, so a reference to an all-zero record is itself zero. An
/// unresolvable handle is non-zero, and a handle already on the current
/// dereference chain is non-zero; self-reference is not absence, which keeps
/// the predicate total on cyclic stores.
pub fn is_zero(index: &RefIndex, value: &Value) -> bool {
	let mut on_chain = HashSet::new();
	is_zero_impl(index, value, &mut on_chain)
}

fn is_zero_impl(index: &RefIndex, value: &Value, on_chain: &mut HashSet<u64>) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(v) => !v,
		Value::I64(v) => *v == 0,
		Value::U64(v) => *v == 0,
		Value::F64(v) => *v == 0.0,
		Value::String(v) => v.is_empty(),
		Value::Bytes(v) => v.is_empty(),
		Value::List(items) => items.is_empty(),
		Value::Record(rec) => rec.fields.iter().all(|field| is_zero_impl(index, &field.value, on_chain)),
		Value::Ref(0) => true,
		Value::Ref(ref_id) => match index.resolve(*ref_id) {
			None => false,
			Some(target) => {
				if !on_chain.insert(*ref_id) {
					return false;
				}
				let zero = is_zero_impl(index, target, on_chain);
				on_chain.remove(ref_id);
				zero
			}
		},
		Value::Opaque(_) => false,
	}
}
