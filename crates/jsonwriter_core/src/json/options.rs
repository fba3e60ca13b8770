/// How text values are written between their quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StringEscape {
	/// Contents are written verbatim.
	///
	/// Quotes, backslashes, and control characters pass through untouched, so
	/// text containing them produces output that is not valid JSON.
	#[default]
	Raw,
	/// Quotes, backslashes, and control characters are escaped.
	Json,
}

impl StringEscape {
	/// Short label used in logs and CLI output.
	pub fn label(self) -> &'static str {
		match self {
			Self::Raw => "raw",
			Self::Json => "json",
		}
	}
}

/// Output options carried by a [`Writer`](crate::json::Writer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
	/// Text escaping mode.
	pub string_escape: StringEscape,
}

impl EncodeOptions {
	/// Preset that keeps output valid JSON for arbitrary text.
	pub fn strict() -> Self {
		Self {
			string_escape: StringEscape::Json,
		}
	}
}
