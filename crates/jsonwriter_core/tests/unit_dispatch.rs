#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};

use jsonwriter::json::{Encode, EncodeError, Result, Writer, to_writer};
use jsonwriter_testkit::{FailingSink, parse_json, render};

mod catalog {
	use std::io::Write;

	use jsonwriter::json::{Encode, Result, Writer};

	/// Exposes its name through an accessor only.
	pub struct Item {
		name: String,
	}

	impl Item {
		pub fn new(name: &str) -> Self {
			Self { name: name.to_owned() }
		}

		pub fn name(&self) -> &str {
			&self.name
		}
	}

	impl Encode for Item {
		fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
			writer.write_raw("{ \"name\": ")?;
			writer.encode(self.name())?;
			writer.write_raw(" }")
		}
	}
}

use catalog::Item;

jsonwriter::define_serialized_struct! {
	#[derive(Default)]
	struct Shelf {
		label: String,
		items: Vec<Item>,
	}
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Slot(u8);

impl Encode for Slot {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.write_raw("\"slot-")?;
		writer.encode(&self.0)?;
		writer.write_raw("\"")
	}
}

#[test]
fn downstream_rule_is_found_in_library_sequence() {
	let items = vec![Item::new("Bruce Wayne"), Item::new("Clark Kent"), Item::new("Tony Stark")];
	assert_eq!(
		render(&items),
		"[{ \"name\": \"Bruce Wayne\" }, { \"name\": \"Clark Kent\" }, { \"name\": \"Tony Stark\" }]"
	);

	let json = parse_json(&render(&items));
	assert_eq!(json[1]["name"], "Clark Kent");
}

#[test]
fn downstream_rule_is_found_in_record_field() {
	let shelf = Shelf {
		label: "top".to_owned(),
		items: vec![Item::new("cape")],
	};
	assert_eq!(render(&shelf), "{ \"label\": \"top\"\n\"items\": [{ \"name\": \"cape\" }]\n} ");
}

#[test]
fn downstream_key_type_orders_by_its_own_ord() {
	let map = BTreeMap::from([(Slot(9), 1), (Slot(2), 2)]);
	assert_eq!(render(&map), "{\"slot-2\": 2, \"slot-9\": 1}");
}

#[test]
fn sink_failure_surfaces_unchanged_and_leaves_partial_output() {
	let mut sink = FailingSink::new(10);
	let err = to_writer(&mut sink, &vec![Item::new("Bruce Wayne")]).expect_err("sink closes");

	match err {
		EncodeError::Io(io_err) => assert_eq!(io_err.kind(), ErrorKind::BrokenPipe),
		other => panic!("expected io error, got {other:?}"),
	}
	assert_eq!(sink.written_text(), "[{ \"name\":");
}

#[test]
fn deep_nesting_encodes() {
	let mut value = vec![Vec::<Vec<u8>>::new()];
	value[0].push(vec![1, 2]);
	let nested = vec![value.clone(), value];
	assert_eq!(render(&nested), "[[[[1, 2]]], [[[1, 2]]]]");
}
