use std::borrow::Cow;

use crate::json::{EncodeOptions, to_string, to_string_with};

#[test]
fn integers_use_canonical_decimal() {
	assert_eq!(to_string(&42).expect("encodes"), "42");
	assert_eq!(to_string(&0_u8).expect("encodes"), "0");
	assert_eq!(to_string(&-7_i16).expect("encodes"), "-7");
	assert_eq!(to_string(&1_000_000_u32).expect("encodes"), "1000000");
}

#[test]
fn integer_extremes_match_display() {
	for value in [i64::MIN, -1, 0, 1, i64::MAX] {
		assert_eq!(to_string(&value).expect("encodes"), value.to_string());
	}
	assert_eq!(to_string(&u64::MAX).expect("encodes"), "18446744073709551615");
	assert_eq!(to_string(&i128::MIN).expect("encodes"), i128::MIN.to_string());
	assert_eq!(to_string(&usize::MAX).expect("encodes"), usize::MAX.to_string());
}

#[test]
fn text_is_quoted() {
	assert_eq!(to_string("ok").expect("encodes"), "\"ok\"");
	assert_eq!(to_string(&String::from("Gotham")).expect("encodes"), "\"Gotham\"");
	assert_eq!(to_string(&Cow::Borrowed("cow")).expect("encodes"), "\"cow\"");
	assert_eq!(to_string("").expect("encodes"), "\"\"");
}

#[test]
fn raw_mode_writes_special_characters_verbatim() {
	assert_eq!(to_string("a\"b\\c\n").expect("encodes"), "\"a\"b\\c\n\"");
}

#[test]
fn strict_mode_escapes_special_characters() {
	let text = to_string_with("a\"b\\c\n", EncodeOptions::strict()).expect("encodes");
	assert_eq!(text, r#""a\"b\\c\n""#);
}
