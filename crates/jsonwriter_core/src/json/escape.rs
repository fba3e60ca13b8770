use std::io::{self, Write};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Write `text` with `"`, `\`, and control characters escaped.
///
/// Runs of bytes that need no escaping are written in one call. Bytes of
/// multi-byte UTF-8 sequences are never below 0x80, so they always pass through.
pub(crate) fn write_escaped<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
	let bytes = text.as_bytes();
	let mut scratch = [0_u8; 6];
	let mut start = 0;

	for (idx, byte) in bytes.iter().enumerate() {
		let Some(escaped) = escape_byte(*byte, &mut scratch) else {
			continue;
		};
		if start < idx {
			out.write_all(&bytes[start..idx])?;
		}
		out.write_all(escaped)?;
		start = idx + 1;
	}

	if start < bytes.len() {
		out.write_all(&bytes[start..])?;
	}
	Ok(())
}

fn escape_byte(byte: u8, scratch: &mut [u8; 6]) -> Option<&[u8]> {
	let short: &[u8] = match byte {
		b'"' => b"\\\"",
		b'\\' => b"\\\\",
		b'\n' => b"\\n",
		b'\r' => b"\\r",
		b'\t' => b"\\t",
		0x08 => b"\\b",
		0x0c => b"\\f",
		0x00..=0x1f => {
			*scratch = [b'\\', b'u', b'0', b'0', HEX[usize::from(byte >> 4)], HEX[usize::from(byte & 0x0f)]];
			return Some(&scratch[..]);
		}
		_ => return None,
	};
	Some(short)
}
