use std::collections::{BTreeMap, VecDeque};

use crate::json::to_string;

#[test]
fn pair_has_no_space_after_comma() {
	assert_eq!(to_string(&(1, "x")).expect("encodes"), "[1,\"x\"]");
	assert_eq!(to_string(&((1, 2), vec![3])).expect("encodes"), "[[1,2],[3]]");
}

#[test]
fn sequences_join_with_comma_space() {
	assert_eq!(to_string(&vec![1, 2, 3]).expect("encodes"), "[1, 2, 3]");
	assert_eq!(to_string(&[7_u8]).expect("encodes"), "[7]");
	assert_eq!(to_string(&VecDeque::from(["a", "b"])).expect("encodes"), "[\"a\", \"b\"]");
	assert_eq!(to_string(&[10, 20][..]).expect("encodes"), "[10, 20]");
}

#[test]
fn empty_containers() {
	assert_eq!(to_string(&Vec::<i32>::new()).expect("encodes"), "[]");
	assert_eq!(to_string(&BTreeMap::<String, i32>::new()).expect("encodes"), "{}");
}

#[test]
fn nested_sequences() {
	assert_eq!(to_string(&vec![vec![1, 2], vec![3, 4]]).expect("encodes"), "[[1, 2], [3, 4]]");
	assert_eq!(to_string(&vec![Vec::<i32>::new(), vec![5]]).expect("encodes"), "[[], [5]]");
}

#[test]
fn mapping_keys_come_out_ascending() {
	let mut map = BTreeMap::new();
	map.insert("b".to_owned(), 2);
	map.insert("a".to_owned(), 1);
	assert_eq!(to_string(&map).expect("encodes"), "{\"a\": 1, \"b\": 2}");

	let numeric = BTreeMap::from([(30, "c"), (-5, "a"), (4, "b")]);
	assert_eq!(to_string(&numeric).expect("encodes"), "{-5: \"a\", 4: \"b\", 30: \"c\"}");
}

#[test]
fn mapping_values_can_be_composites() {
	let map = BTreeMap::from([("pairs", vec![(1, 2)]), ("empty", Vec::new())]);
	assert_eq!(to_string(&map).expect("encodes"), "{\"empty\": [], \"pairs\": [[1,2]]}");
}
