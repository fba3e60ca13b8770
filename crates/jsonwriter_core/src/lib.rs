//! Statically dispatched JSON-like text encoding.
//!
//! Values are written through [`json::Encode`], a trait implemented here for
//! integers, text, pairs, sequences, and ordered maps, and by any other type
//! next to its own definition. Records can be declared together with their
//! encoder through [`define_serialized_struct!`].
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! jsonwriter::define_serialized_struct! {
//! 	#[derive(Debug, Default)]
//! 	pub struct Person {
//! 		name: String,
//! 		age: i32,
//! 	}
//! }
//!
//! let person = Person { name: "Batman".to_owned(), age: 30 };
//! let text = jsonwriter::json::to_string(&person).unwrap();
//! assert_eq!(text, "{ \"name\": \"Batman\"\n\"age\": 30\n} ");
//!
//! let scores = BTreeMap::from([("b", 2), ("a", 1)]);
//! assert_eq!(jsonwriter::json::to_string(&scores).unwrap(), "{\"a\": 1, \"b\": 2}");
//! ```

/// Encoder trait, writer, built-in rules, and record helpers.
pub mod json;
