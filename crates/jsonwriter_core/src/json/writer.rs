use std::fmt::Display;
use std::io::Write;

use crate::json::escape::write_escaped;
use crate::json::{Encode, EncodeOptions, Result, StringEscape};

/// Output side of encoding: a sink plus the [`EncodeOptions`] in effect.
///
/// The writer neither buffers nor flushes. Every call forwards to the sink
/// immediately, so a failed write leaves whatever was already written in
/// place. Pass `&mut sink` to keep ownership of the sink with the caller.
pub struct Writer<W> {
	out: W,
	options: EncodeOptions,
}

impl<W: Write> Writer<W> {
	/// Wrap `out` with default options.
	pub fn new(out: W) -> Self {
		Self::with_options(out, EncodeOptions::default())
	}

	/// Wrap `out` with explicit options.
	pub fn with_options(out: W, options: EncodeOptions) -> Self {
		Self { out, options }
	}

	/// Options in effect for this writer.
	pub fn options(&self) -> EncodeOptions {
		self.options
	}

	/// Mutable access to the underlying sink.
	pub fn get_mut(&mut self) -> &mut W {
		&mut self.out
	}

	/// Unwrap the underlying sink.
	pub fn into_inner(self) -> W {
		self.out
	}

	/// Encode a nested value.
	///
	/// This is the single dispatch point: every container and record rule
	/// encodes its elements through here, which resolves to whichever
	/// [`Encode`] impl the element type has, in this crate or elsewhere.
	pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
		value.encode(self)
	}

	/// Write `text` as-is.
	pub fn write_raw(&mut self, text: &str) -> Result<()> {
		self.out.write_all(text.as_bytes())?;
		Ok(())
	}

	/// Write `text` as a quoted string, escaped according to the options.
	pub fn write_string(&mut self, text: &str) -> Result<()> {
		self.write_raw("\"")?;
		match self.options.string_escape {
			StringEscape::Raw => self.write_raw(text)?,
			StringEscape::Json => write_escaped(&mut self.out, text)?,
		}
		self.write_raw("\"")
	}

	pub(crate) fn write_display(&mut self, value: impl Display) -> Result<()> {
		write!(self.out, "{value}")?;
		Ok(())
	}

	/// Open a record object.
	pub fn begin_record(&mut self) -> Result<()> {
		self.write_raw("{ ")
	}

	/// Write one record member: the quoted name, `: `, the value, and a line terminator.
	///
	/// A leading `r#` on `name` is dropped so raw identifiers keep their plain spelling.
	pub fn record_field<T: Encode + ?Sized>(&mut self, name: &str, value: &T) -> Result<()> {
		self.write_string(name.strip_prefix("r#").unwrap_or(name))?;
		self.write_raw(": ")?;
		self.encode(value)?;
		self.write_raw("\n")
	}

	/// Close a record object.
	pub fn end_record(&mut self) -> Result<()> {
		self.write_raw("} ")
	}
}

/// Encode `value` into `out` with default options.
pub fn to_writer<W: Write, T: Encode + ?Sized>(out: W, value: &T) -> Result<()> {
	to_writer_with(out, value, EncodeOptions::default())
}

/// Encode `value` into `out` with explicit options.
pub fn to_writer_with<W: Write, T: Encode + ?Sized>(out: W, value: &T, options: EncodeOptions) -> Result<()> {
	tracing::trace!(value_type = std::any::type_name::<T>(), escape = options.string_escape.label(), "encoding value");
	Writer::with_options(out, options).encode(value)
}

/// Encode `value` into a fresh byte vector with default options.
pub fn to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
	to_vec_with(value, EncodeOptions::default())
}

/// Encode `value` into a fresh byte vector with explicit options.
pub fn to_vec_with<T: Encode + ?Sized>(value: &T, options: EncodeOptions) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	to_writer_with(&mut out, value, options)?;
	Ok(out)
}

/// Encode `value` into a `String` with default options.
pub fn to_string<T: Encode + ?Sized>(value: &T) -> Result<String> {
	to_string_with(value, EncodeOptions::default())
}

/// Encode `value` into a `String` with explicit options.
pub fn to_string_with<T: Encode + ?Sized>(value: &T, options: EncodeOptions) -> Result<String> {
	Ok(String::from_utf8(to_vec_with(value, options)?)?)
}
