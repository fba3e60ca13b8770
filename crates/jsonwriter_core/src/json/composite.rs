use std::collections::{BTreeMap, VecDeque};
use std::io::Write;

use crate::json::{Encode, Result, Writer};

/// Pairs are two-element arrays with no space after the comma.
impl<U: Encode, V: Encode> Encode for (U, V) {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.write_raw("[")?;
		writer.encode(&self.0)?;
		writer.write_raw(",")?;
		writer.encode(&self.1)?;
		writer.write_raw("]")
	}
}

fn encode_sequence<'a, W, T, I>(writer: &mut Writer<W>, items: I) -> Result<()>
where
	W: Write,
	T: Encode + 'a,
	I: IntoIterator<Item = &'a T>,
{
	writer.write_raw("[")?;
	for (idx, item) in items.into_iter().enumerate() {
		if idx > 0 {
			writer.write_raw(", ")?;
		}
		writer.encode(item)?;
	}
	writer.write_raw("]")
}

impl<T: Encode> Encode for [T] {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		encode_sequence(writer, self)
	}
}

impl<T: Encode, const N: usize> Encode for [T; N] {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		encode_sequence(writer, self)
	}
}

impl<T: Encode> Encode for Vec<T> {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		encode_sequence(writer, self)
	}
}

impl<T: Encode> Encode for VecDeque<T> {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		encode_sequence(writer, self)
	}
}

/// Maps iterate in ascending key order, so output never depends on insertion order.
impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.write_raw("{")?;
		for (idx, (key, value)) in self.iter().enumerate() {
			if idx > 0 {
				writer.write_raw(", ")?;
			}
			writer.encode(key)?;
			writer.write_raw(": ")?;
			writer.encode(value)?;
		}
		writer.write_raw("}")
	}
}

#[cfg(test)]
mod tests;
