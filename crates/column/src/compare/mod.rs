// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

mod equal;

pub use equal::{equal, equal_value};

use crate::dictionary::Dictionary;

/// For each entry of `source`, the index of the same value in `target`,
/// or `None` when `target` has no such entry. Lets index level operations
/// span two dictionaries without decoding rows.
pub(crate) fn translation_map(source: &Dictionary, target: &Dictionary) -> Vec<Option<u32>> {
	source.values().iter().map(|value| target.lookup(value)).collect()
}
