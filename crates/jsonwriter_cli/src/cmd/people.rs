use std::io::Write;

use jsonwriter::json::{Encode, EncodeOptions, Result, Writer};

use crate::cmd::util::emit;

const DEFAULT_NAMES: [&str; 3] = ["Bruce Wayne", "Clark Kent", "Tony Stark"];

/// A person whose name is only reachable through an accessor.
pub struct Person {
	name: String,
}

impl Person {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

/// Writes `{ "name": ... }`, quoting the name through the text rule.
impl Encode for Person {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.write_raw("{ \"name\": ")?;
		writer.encode(self.name())?;
		writer.write_raw(" }")
	}
}

#[derive(clap::Args)]
pub struct Args {
	/// Names to encode; a few well-known heroes when omitted.
	pub names: Vec<String>,
}

/// Encode the given people as a sequence.
pub fn run(args: Args, options: EncodeOptions) -> Result<()> {
	let Args { names } = args;
	let people: Vec<Person> = if names.is_empty() {
		DEFAULT_NAMES.iter().copied().map(Person::new).collect()
	} else {
		names.into_iter().map(Person::new).collect()
	};

	tracing::debug!(count = people.len(), "encoding people");
	emit(&people, options)
}
