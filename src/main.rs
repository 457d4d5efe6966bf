#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "shapemap", about = "Structure flattening and zero-value pruning tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Flatten a JSON document, pruning zero-valued fields.
	Flatten(cmd::flatten::Args),
	/// Check whether a JSON document is structurally zero.
	Zero(cmd::zero::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> shapemap::shape::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Flatten(args) => cmd::flatten::run(args),
		Commands::Zero(args) => cmd::zero::run(args),
	}
}
