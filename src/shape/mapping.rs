use std::collections::HashMap;

/// One flattened field value inside a [`Mapping`].
///
/// Owns its contents: no reference handles survive flattening, so the
/// snapshot encodes directly without touching the source value or its index.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatValue {
	/// Absent scalar, only reachable through list elements.
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
	/// Element-wise converted sequence.
	List(Vec<FlatValue>),
	/// Label of a non-data shape kept under the permissive policy.
	Opaque(Box<str>),
	/// Nested flattened record.
	Map(Mapping),
}

/// Field-name keyed snapshot produced by flattening.
///
/// Key order is irrelevant; [`Mapping::sorted_names`] gives the stable order
/// used by rendering and JSON emission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
	entries: HashMap<Box<str>, FlatValue>,
}

impl Mapping {
	/// Create an empty mapping.
	pub fn new() -> Self {
		Self { entries: HashMap::new() }
	}

	/// Insert one field, replacing any previous value under the same name.
	pub fn insert(&mut self, name: Box<str>, value: FlatValue) {
		self.entries.insert(name, value);
	}

	/// Look up a field by name.
	pub fn get(&self, name: &str) -> Option<&FlatValue> {
		self.entries.get(name)
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the mapping holds no fields.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate fields in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FlatValue)> {
		self.entries.iter().map(|(name, value)| (name.as_ref(), value))
	}

	/// Field names in sorted order.
	pub fn sorted_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.entries.keys().map(|name| name.as_ref()).collect();
		names.sort_unstable();
		names
	}

	/// Convert the snapshot into a generic JSON value.
	pub fn to_json(&self) -> serde_json::Value {
		let mut members = serde_json::Map::new();
		for name in self.sorted_names() {
			if let Some(value) = self.entries.get(name) {
				members.insert(name.to_owned(), value.to_json());
			}
		}
		serde_json::Value::Object(members)
	}
}

impl FlatValue {
	/// Convert one flattened value into a generic JSON value.
	///
	/// Bytes become number arrays, opaque labels become tagged strings, and
	/// non-finite floats become null.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			FlatValue::Null => serde_json::Value::Null,
			FlatValue::Bool(v) => serde_json::Value::Bool(*v),
			FlatValue::I64(v) => serde_json::Value::from(*v),
			FlatValue::U64(v) => serde_json::Value::from(*v),
			FlatValue::F64(v) => serde_json::Number::from_f64(*v).map(serde_json::Value::Number).unwrap_or(serde_json::Value::Null),
			FlatValue::String(v) => serde_json::Value::String(v.to_string()),
			FlatValue::Bytes(v) => serde_json::Value::Array(v.iter().map(|byte| serde_json::Value::from(*byte)).collect()),
			FlatValue::List(items) => serde_json::Value::Array(items.iter().map(FlatValue::to_json).collect()),
			FlatValue::Opaque(label) => serde_json::Value::String(format!("<opaque:{label}>")),
			FlatValue::Map(mapping) => mapping.to_json(),
		}
	}
}
