// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use std::{collections::HashMap, sync::Arc};

use cardinal_type::{Result, err, error::diagnostic::dictionary::dictionary_value_type_mismatch};
use tracing::trace;

use crate::{compare::translation_map, container::EnumContainer};

/// Inner equi join of two enum columns on their decoded values, computed
/// on raw indices. Returns matching `(left_row, right_row)` pairs ordered
/// by left row, then right row. Undefined rows match nothing.
pub fn equi_join(left: &EnumContainer, right: &EnumContainer) -> Result<Vec<(usize, usize)>> {
	let expected = left.dictionary().value_type();
	let actual = right.dictionary().value_type();
	if expected != actual {
		return err!(dictionary_value_type_mismatch(expected, actual));
	}

	// bucket the probe side by its raw indices
	let mut buckets: HashMap<u32, Vec<usize>> = HashMap::new();
	for position in 0..right.len() {
		if let Some(index) = right.index_at(position) {
			buckets.entry(index).or_default().push(position);
		}
	}

	let translation = if Arc::ptr_eq(left.dictionary(), right.dictionary()) {
		None
	} else {
		trace!("distinct dictionary instances, joining through a translation map");
		Some(translation_map(left.dictionary(), right.dictionary()))
	};

	let mut pairs = Vec::new();
	for position in 0..left.len() {
		let Some(index) = left.index_at(position) else {
			continue;
		};
		let target = match &translation {
			None => Some(index),
			Some(map) => map.get(index as usize).copied().flatten(),
		};
		if let Some(target) = target {
			if let Some(matches) = buckets.get(&target) {
				for &right_position in matches {
					pairs.push((position, right_position));
				}
			}
		}
	}
	Ok(pairs)
}
