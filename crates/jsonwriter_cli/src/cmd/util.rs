use std::io::{self, Write};

use jsonwriter::json::{Encode, EncodeOptions, Result, to_writer_with};

/// Encode `value` to stdout followed by a newline.
pub fn emit<T: Encode + ?Sized>(value: &T, options: EncodeOptions) -> Result<()> {
	let stdout = io::stdout();
	let mut out = stdout.lock();
	to_writer_with(&mut out, value, options)?;
	writeln!(out)?;
	Ok(())
}
