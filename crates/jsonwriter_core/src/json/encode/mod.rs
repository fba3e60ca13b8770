use std::io::Write;
use std::rc::Rc;
use std::sync::Arc;

use crate::json::{Result, Writer};

/// A type with a statically resolved rule for its JSON-like text form.
///
/// This crate implements it for integers, text, pairs, sequences, and
/// `BTreeMap`. Any other type opts in by implementing it next to its own
/// definition, by hand or through [`define_encode!`](crate::define_encode).
/// There is no registry: a type without an impl cannot be encoded, and the
/// compiler says so.
///
/// Rules for containers and records reach their elements only through
/// [`Writer::encode`], so a user impl is found wherever the type is nested.
pub trait Encode {
	/// Write the textual form of `self` to `writer`.
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()>;
}

/// Encode `value` through the writer's dispatch point.
///
/// Equivalent to [`Writer::encode`]; provided for call sites that read better
/// as a free function.
pub fn encode<W: Write, T: Encode + ?Sized>(writer: &mut Writer<W>, value: &T) -> Result<()> {
	writer.encode(value)
}

impl<T: Encode + ?Sized> Encode for &T {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.encode(*self)
	}
}

impl<T: Encode + ?Sized> Encode for &mut T {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.encode(&**self)
	}
}

impl<T: Encode + ?Sized> Encode for Box<T> {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.encode(&**self)
	}
}

impl<T: Encode + ?Sized> Encode for Rc<T> {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.encode(&**self)
	}
}

impl<T: Encode + ?Sized> Encode for Arc<T> {
	fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
		writer.encode(&**self)
	}
}
