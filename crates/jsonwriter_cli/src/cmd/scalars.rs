use std::collections::BTreeMap;

use jsonwriter::json::{EncodeOptions, Result};

use crate::cmd::util::emit;

/// Print one line per built-in composite shape.
pub fn run(options: EncodeOptions) -> Result<()> {
	emit(&(1, "x"), options)?;
	emit(&vec![1, 2, 3], options)?;
	emit(&vec![vec![1, 2], vec![3, 4]], options)?;

	let mut map = BTreeMap::new();
	map.insert("b".to_owned(), 2);
	map.insert("a".to_owned(), 1);
	emit(&map, options)
}
