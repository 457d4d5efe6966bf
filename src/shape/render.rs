use crate::shape::mapping::{FlatValue, Mapping};

/// Output truncation and formatting limits for rendered mappings.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
	/// Spaces per indentation level.
	pub indent_width: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for lists.
	pub max_list_items: usize,
	/// Maximum recursive render depth for nested lists/mappings.
	pub max_render_depth: u32,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			indent_width: 2,
			max_string_len: 200,
			max_list_items: 16,
			max_render_depth: 8,
		}
	}
}

/// Render a mapping as indented text, one field per line, sorted by name.
pub fn render_mapping(mapping: &Mapping, options: &RenderOptions) -> String {
	let mut out = String::new();
	render_map_body(&mut out, mapping, 0, 0, options);
	out
}

fn render_map_body(out: &mut String, mapping: &Mapping, indent: usize, depth: u32, options: &RenderOptions) {
	let pad = " ".repeat(indent * options.indent_width);
	for name in mapping.sorted_names() {
		let Some(value) = mapping.get(name) else { continue };
		match value {
			FlatValue::Map(nested) => {
				if nested.is_empty() {
					out.push_str(&format!("{pad}{name}: {{}}\n"));
				} else if depth >= options.max_render_depth {
					out.push_str(&format!("{pad}{name}: {{ ... {} fields }}\n", nested.len()));
				} else {
					out.push_str(&format!("{pad}{name}:\n"));
					render_map_body(out, nested, indent + 1, depth + 1, options);
				}
			}
			FlatValue::List(items) => {
				out.push_str(&format!("{pad}{name} = "));
				render_list(out, items, indent, depth, options);
			}
			scalar => {
				out.push_str(&format!("{pad}{name} = {}\n", render_scalar(scalar, options)));
			}
		}
	}
}

fn render_list(out: &mut String, items: &[FlatValue], indent: usize, depth: u32, options: &RenderOptions) {
	if items.is_empty() {
		out.push_str("[]\n");
		return;
	}
	if depth >= options.max_render_depth {
		out.push_str(&format!("[... {} items]\n", items.len()));
		return;
	}

	let pad = " ".repeat(indent * options.indent_width);
	let item_pad = " ".repeat((indent + 1) * options.indent_width);
	out.push_str("[\n");
	for item in items.iter().take(options.max_list_items) {
		match item {
			FlatValue::Map(nested) => {
				if nested.is_empty() {
					out.push_str(&format!("{item_pad}{{}}\n"));
				} else {
					out.push_str(&format!("{item_pad}{{\n"));
					render_map_body(out, nested, indent + 2, depth + 1, options);
					out.push_str(&format!("{item_pad}}}\n"));
				}
			}
			FlatValue::List(nested) => {
				out.push_str(&item_pad);
				render_list(out, nested, indent + 1, depth + 1, options);
			}
			scalar => {
				out.push_str(&format!("{item_pad}{}\n", render_scalar(scalar, options)));
			}
		}
	}
	if items.len() > options.max_list_items {
		out.push_str(&format!("{item_pad}... {} more\n", items.len() - options.max_list_items));
	}
	out.push_str(&format!("{pad}]\n"));
}

fn render_scalar(value: &FlatValue, options: &RenderOptions) -> String {
	match value {
		FlatValue::Null => "null".to_owned(),
		FlatValue::Bool(v) => v.to_string(),
		FlatValue::I64(v) => v.to_string(),
		FlatValue::U64(v) => v.to_string(),
		FlatValue::F64(v) => v.to_string(),
		FlatValue::String(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		FlatValue::Bytes(v) => format!("bytes[{}]", v.len()),
		FlatValue::Opaque(label) => format!("<{label}>"),
		// Containers are rendered by the callers.
		FlatValue::Map(_) | FlatValue::List(_) => String::new(),
	}
}

fn truncate(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_owned();
	}
	let mut out: String = text.chars().take(max_chars).collect();
	out.push_str("...");
	out
}
