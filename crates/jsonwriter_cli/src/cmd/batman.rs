use jsonwriter::json::{EncodeOptions, Result};

use crate::cmd::util::emit;

jsonwriter::define_serialized_struct! {
	/// Postal address with free-form street lines.
	#[derive(Debug, Clone, Default)]
	pub struct Address {
		lines: Vec<String>,
		city: String,
		state: String,
		postal_code: String,
	}
}

jsonwriter::define_serialized_struct! {
	/// A person with a nested address.
	#[derive(Debug, Clone, Default)]
	pub struct Person {
		name: String,
		address: Address,
		age: i32,
	}
}

#[derive(clap::Args)]
pub struct Args {
	#[arg(long, default_value = "Batman")]
	pub name: String,
	#[arg(long, default_value_t = 30)]
	pub age: i32,
	#[arg(long, default_value = "Gotham")]
	pub city: String,
}

/// Build and encode the nested record.
pub fn run(args: Args, options: EncodeOptions) -> Result<()> {
	let Args { name, age, city } = args;

	let mut address = Address::default();
	address.lines.push("1007 Mountain Drive".to_owned());
	address.city = city;
	address.state = "NY".to_owned();
	address.postal_code = "12345".to_owned();

	let person = Person { name, address, age };
	emit(&person, options)
}
