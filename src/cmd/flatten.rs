use std::path::PathBuf;

use shapemap::shape::{FlattenOptions, RefIndex, RenderOptions, Value, flatten, render_mapping};

use crate::cmd::util::load_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

#[derive(serde::Serialize)]
struct FlattenPayload {
	file: String,
	fields: usize,
	mapping: serde_json::Value,
}

/// Flatten a JSON document and print the pruned field mapping.
pub fn run(args: Args) -> shapemap::shape::Result<()> {
	let doc = load_json(&args.file)?;
	let value = Value::from_json(&doc);

	let mut options = FlattenOptions::default();
	if let Some(max_depth) = args.max_depth {
		options.max_depth = max_depth;
	}

	let index = RefIndex::new();
	let mapping = flatten(&index, &value, &options)?;

	if args.json {
		let payload = FlattenPayload {
			file: args.file.display().to_string(),
			fields: mapping.len(),
			mapping: mapping.to_json(),
		};
		println!("{}", serde_json::to_string_pretty(&payload)?);
	} else {
		print!("{}", render_mapping(&mapping, &RenderOptions::default()));
	}

	Ok(())
}
