/// Runtime value shapes understood by the flattener.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent scalar.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// Floating-point scalar.
	F64(f64),
	/// Text scalar.
	String(Box<str>),
	/// Raw byte payload.
	Bytes(Vec<u8>),
	/// Ordered element sequence.
	List(Vec<Value>),
	/// Reference handle into a [`RefIndex`](crate::shape::RefIndex), `0` when absent.
	Ref(u64),
	/// Structured record with named fields.
	Record(RecordValue),
	/// Non-data shape carried through by label only.
	Opaque(Box<str>),
}

/// One record instance with its field values in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	/// Record type name.
	pub type_name: Box<str>,
	/// Field values in declaration order.
	pub fields: Vec<FieldValue>,
}

/// One named field inside a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Whether the field is externally visible; hidden fields never reach output.
	pub exported: bool,
	/// Current field value.
	pub value: Value,
}

impl Value {
	/// Short label for the value's shape, used in error reporting.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::I64(_) => "i64",
			Value::U64(_) => "u64",
			Value::F64(_) => "f64",
			Value::String(_) => "string",
			Value::Bytes(_) => "bytes",
			Value::List(_) => "list",
			Value::Ref(_) => "ref",
			Value::Record(_) => "record",
			Value::Opaque(_) => "opaque",
		}
	}

	/// Convert a JSON document into the shape model.
	///
	/// Objects become records with every field exported. Integers prefer
	/// `I64`, then `U64`; other numbers become `F64`.
	pub fn from_json(json: &serde_json::Value) -> Value {
		match json {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(v) => Value::Bool(*v),
			serde_json::Value::Number(v) => {
				if let Some(n) = v.as_i64() {
					Value::I64(n)
				} else if let Some(n) = v.as_u64() {
					Value::U64(n)
				} else {
					Value::F64(v.as_f64().unwrap_or(0.0))
				}
			}
			serde_json::Value::String(v) => Value::String(v.clone().into_boxed_str()),
			serde_json::Value::Array(items) => Value::List(items.iter().map(Value::from_json).collect()),
			serde_json::Value::Object(members) => {
				let fields = members
					.iter()
					.map(|(name, member)| FieldValue {
						name: name.clone().into_boxed_str(),
						exported: true,
						value: Value::from_json(member),
					})
					.collect();
				Value::Record(RecordValue {
					type_name: Box::<str>::from("object"),
					fields,
				})
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{FieldValue, Value};

	#[test]
	fn json_object_becomes_exported_record() {
		let doc: serde_json::Value = serde_json::from_str(r#"{"name":"a","count":3}"#).expect("doc parses");
		let value = Value::from_json(&doc);

		let Value::Record(rec) = value else {
			panic!("expected record");
		};
		assert_eq!(rec.type_name.as_ref(), "object");
		assert_eq!(rec.fields.len(), 2);
		assert!(rec.fields.iter().all(|field| field.exported));

		let name = rec.fields.iter().find(|field| field.name.as_ref() == "name").expect("name field exists");
		assert_eq!(name.value, Value::String("a".into()));
		let count = rec.fields.iter().find(|field| field.name.as_ref() == "count").expect("count field exists");
		assert_eq!(count.value, Value::I64(3));
	}

	#[test]
	fn json_number_widths_are_dispatched() {
		let doc: serde_json::Value = serde_json::from_str(r#"[-2, 18446744073709551615, 1.5]"#).expect("doc parses");
		let Value::List(items) = Value::from_json(&doc) else {
			panic!("expected list");
		};
		assert_eq!(items[0], Value::I64(-2));
		assert_eq!(items[1], Value::U64(u64::MAX));
		assert_eq!(items[2], Value::F64(1.5));
	}

	#[test]
	fn json_null_and_nested_arrays_convert() {
		let doc: serde_json::Value = serde_json::from_str(r#"{"inner":{"tags":[null,true]}}"#).expect("doc parses");
		let Value::Record(rec) = Value::from_json(&doc) else {
			panic!("expected record");
		};
		let FieldValue { value: Value::Record(inner), .. } = &rec.fields[0] else {
			panic!("expected nested record");
		};
		assert_eq!(inner.fields[0].value, Value::List(vec![Value::Null, Value::Bool(true)]));
	}

	#[test]
	fn kind_names_are_stable() {
		assert_eq!(Value::Null.kind_name(), "null");
		assert_eq!(Value::Ref(7).kind_name(), "ref");
		assert_eq!(Value::Opaque("closure".into()).kind_name(), "opaque");
	}
}
