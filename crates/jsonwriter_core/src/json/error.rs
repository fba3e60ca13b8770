use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors produced while writing encoded text.
///
/// Encoding itself cannot fail; every variant comes from the output side.
#[derive(Debug, Error)]
pub enum EncodeError {
	/// The sink rejected a write. Text written before the failure stays in the sink.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Collected output was not valid UTF-8.
	///
	/// Built-in rules only write UTF-8; this comes from a custom rule that
	/// wrote raw bytes through [`Writer::get_mut`](crate::json::Writer::get_mut).
	#[error("encoded output is not utf-8: {0}")]
	NonUtf8Output(#[from] std::string::FromUtf8Error),
}
