use std::borrow::Cow;
use std::io::Write;

use crate::json::{Encode, Result, Writer};

// Decimal form, single leading `-` for negatives, no grouping.
macro_rules! encode_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl Encode for $ty {
				fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
					writer.write_display(self)
				}
			}
		)*
	};
}

encode_integer!(i8, i16, i32, i64, i128, isize);
encode_integer!(u8, u16, u32, u64, u128, usize);

impl Encode for str {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.write_string(self)
	}
}

impl Encode for String {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.write_string(self)
	}
}

impl Encode for Cow<'_, str> {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.write_string(self)
	}
}

#[cfg(test)]
mod tests;
