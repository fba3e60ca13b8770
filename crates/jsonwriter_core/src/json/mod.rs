mod composite;
mod encode;
mod error;
mod escape;
mod options;
mod primitive;
pub mod record;
mod writer;

/// Encoding trait and free-function dispatch point.
pub use encode::{Encode, encode};
/// Error and result aliases.
pub use error::{EncodeError, Result};
/// Output options.
pub use options::{EncodeOptions, StringEscape};
/// Sink wrapper and top-level entry points.
pub use writer::{Writer, to_string, to_string_with, to_vec, to_vec_with, to_writer, to_writer_with};
