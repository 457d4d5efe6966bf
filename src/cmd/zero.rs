use std::path::PathBuf;

use shapemap::shape::{RefIndex, Value, is_zero};

use crate::cmd::util::load_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct ZeroPayload {
	file: String,
	zero: bool,
}

/// Report whether a JSON document is structurally zero.
pub fn run(args: Args) -> shapemap::shape::Result<()> {
	let doc = load_json(&args.file)?;
	let value = Value::from_json(&doc);

	let index = RefIndex::new();
	let zero = is_zero(&index, &value);

	if args.json {
		let payload = ZeroPayload {
			file: args.file.display().to_string(),
			zero,
		};
		println!("{}", serde_json::to_string_pretty(&payload)?);
	} else {
		println!("{}", if zero { "zero" } else { "non-zero" });
	}

	Ok(())
}
