//! Declarative record definitions.
//!
//! A record is a plain struct whose encoder writes a JSON-like object with the
//! field names as keys, in declaration order:
//!
//! ```text
//! { "name": "Batman"
//! "age": 30
//! } 
//! ```
//!
//! Every field is followed by a line terminator, fields carry no separator,
//! the object opens with `{ ` and closes with `} `.
//!
//! [`define_serialized_struct!`](crate::define_serialized_struct) declares the
//! struct and its encoder together. The two halves are also available on
//! their own: [`define_struct_only!`](crate::define_struct_only) for a type
//! that gets a hand-written encoder, and [`define_encode!`](crate::define_encode)
//! to retrofit an encoder onto an existing struct.

/// Whether every name in `names` is distinct.
///
/// Evaluated in a `const` item by [`define_encode!`](crate::define_encode) so a
/// repeated field is a compile error.
pub const fn field_names_unique(names: &[&str]) -> bool {
	let mut first = 0;
	while first < names.len() {
		let mut second = first + 1;
		while second < names.len() {
			if bytes_eq(names[first].as_bytes(), names[second].as_bytes()) {
				return false;
			}
			second += 1;
		}
		first += 1;
	}
	true
}

const fn bytes_eq(lhs: &[u8], rhs: &[u8]) -> bool {
	if lhs.len() != rhs.len() {
		return false;
	}
	let mut idx = 0;
	while idx < lhs.len() {
		if lhs[idx] != rhs[idx] {
			return false;
		}
		idx += 1;
	}
	true
}

/// Define a plain struct from an ordered field list.
///
/// Every field becomes `pub`. Outer attributes on the struct and on each
/// field are kept, so derives and doc comments work as usual.
///
/// ```
/// jsonwriter::define_struct_only! {
/// 	#[derive(Debug, Default)]
/// 	pub struct Point {
/// 		x: i32,
/// 		y: i32,
/// 	}
/// }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(point.x + point.y, 3);
/// ```
#[macro_export]
macro_rules! define_struct_only {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field:ident : $ty:ty
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$(
				$(#[$field_meta])*
				pub $field: $ty,
			)+
		}
	};
}

/// Implement [`Encode`](crate::json::Encode) for an existing struct as a record.
///
/// The list may name any subset of the struct's fields in any order; output
/// follows the list. Field types may be given as `name: Type` and are ignored.
/// Naming a field twice fails to compile.
///
/// ```
/// pub struct Account {
/// 	pub id: u64,
/// 	pub owner: String,
/// 	pub secret: String,
/// }
///
/// jsonwriter::define_encode!(Account { owner, id });
///
/// let account = Account { id: 9, owner: "Alfred".to_owned(), secret: "cave".to_owned() };
/// let text = jsonwriter::json::to_string(&account).unwrap();
/// assert_eq!(text, "{ \"owner\": \"Alfred\"\n\"id\": 9\n} ");
/// # let _ = account.secret;
/// ```
///
/// A repeated name is rejected while the crate compiles:
///
/// ```compile_fail
/// pub struct Dup {
/// 	pub a: u8,
/// }
///
/// jsonwriter::define_encode!(Dup { a, a });
/// ```
///
/// So is an empty list:
///
/// ```compile_fail
/// pub struct Unit {}
///
/// jsonwriter::define_encode!(Unit {});
/// ```
#[macro_export]
macro_rules! define_encode {
	($name:ty { $($field:ident $(: $ty:ty)?),+ $(,)? }) => {
		const _: () = ::core::assert!(
			$crate::json::record::field_names_unique(&[$(::core::stringify!($field)),+]),
			"duplicate field name in record encoder"
		);

		impl $crate::json::Encode for $name {
			fn encode<W: ::std::io::Write>(&self, writer: &mut $crate::json::Writer<W>) -> $crate::json::Result<()> {
				writer.begin_record()?;
				$(
					writer.record_field(::core::stringify!($field), &self.$field)?;
				)+
				writer.end_record()
			}
		}
	};
}

/// Define a struct and its record encoder from one ordered field list.
///
/// Combines [`define_struct_only!`](crate::define_struct_only) and
/// [`define_encode!`](crate::define_encode): keys appear in declaration order.
/// A record needs at least one field:
///
/// ```compile_fail
/// jsonwriter::define_serialized_struct! {
/// 	pub struct Empty {}
/// }
/// ```
///
/// and field names must be distinct:
///
/// ```compile_fail
/// jsonwriter::define_serialized_struct! {
/// 	pub struct Twice {
/// 		name: String,
/// 		name: String,
/// 	}
/// }
/// ```
#[macro_export]
macro_rules! define_serialized_struct {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field:ident : $ty:ty
			),+ $(,)?
		}
	) => {
		$crate::define_struct_only! {
			$(#[$meta])*
			$vis struct $name {
				$(
					$(#[$field_meta])*
					$field: $ty
				),+
			}
		}

		$crate::define_encode!($name { $($field),+ });
	};
}
