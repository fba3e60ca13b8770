#![allow(missing_docs)]

use clap::{Parser, Subcommand, ValueEnum};
use jsonwriter::json::{EncodeOptions, StringEscape};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "jsonwriter", about = "Encode sample values as JSON-like text")]
struct Cli {
	/// How text values are written between quotes.
	#[arg(long, value_enum, default_value_t = EscapeArg::Raw, global = true)]
	escape: EscapeArg,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode a list of people through a hand-written rule.
	People(cmd::people::Args),
	/// Encode a declared record with a nested address.
	Batman(cmd::batman::Args),
	/// Encode a pair, a sequence, a nested sequence, and a mapping.
	Scalars,
}

#[derive(Clone, Copy, ValueEnum)]
enum EscapeArg {
	Raw,
	Json,
}

impl From<EscapeArg> for StringEscape {
	fn from(value: EscapeArg) -> Self {
		match value {
			EscapeArg::Raw => Self::Raw,
			EscapeArg::Json => Self::Json,
		}
	}
}

fn main() {
	if let Err(err) = logging::init() {
		eprintln!("error: logging: {err}");
		std::process::exit(1);
	}
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> jsonwriter::json::Result<()> {
	let cli = Cli::parse();
	let options = EncodeOptions {
		string_escape: cli.escape.into(),
	};
	tracing::debug!(escape = options.string_escape.label(), "options resolved");

	match cli.command {
		Commands::People(args) => cmd::people::run(args, options),
		Commands::Batman(args) => cmd::batman::run(args, options),
		Commands::Scalars => cmd::scalars::run(options),
	}
}
