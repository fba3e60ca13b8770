//! Shared test helpers for workspace crates.

use std::io::{self, Write};

use jsonwriter::json::{Encode, EncodeOptions, to_string_with};

/// Encode `value` with default options, panicking on failure.
pub fn render<T: Encode + ?Sized>(value: &T) -> String {
	render_with(value, EncodeOptions::default())
}

/// Encode `value` with `options`, panicking on failure.
pub fn render_with<T: Encode + ?Sized>(value: &T, options: EncodeOptions) -> String {
	to_string_with(value, options).expect("value encodes into memory")
}

/// Parse `text` as JSON, panicking with the text when it is not valid.
pub fn parse_json(text: &str) -> serde_json::Value {
	serde_json::from_str(text).unwrap_or_else(|err| panic!("expected valid json ({err}): {text}"))
}

/// Sink that accepts `capacity` bytes and then fails every write.
#[derive(Debug, Default)]
pub struct FailingSink {
	/// Bytes accepted so far.
	pub written: Vec<u8>,
	/// Bytes accepted before writes start failing.
	pub capacity: usize,
}

impl FailingSink {
	/// Sink accepting at most `capacity` bytes.
	pub fn new(capacity: usize) -> Self {
		Self {
			written: Vec::new(),
			capacity,
		}
	}

	/// Accepted bytes as text.
	pub fn written_text(&self) -> String {
		String::from_utf8_lossy(&self.written).into_owned()
	}
}

impl Write for FailingSink {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let room = self.capacity.saturating_sub(self.written.len());
		if room == 0 {
			return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
		}
		let take = room.min(buf.len());
		self.written.extend_from_slice(&buf[..take]);
		Ok(take)
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
