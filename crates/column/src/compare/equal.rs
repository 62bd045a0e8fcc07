// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use std::sync::Arc;

use cardinal_type::{
	Result, Value, err, error::diagnostic::dictionary::dictionary_value_type_mismatch, return_internal_error,
};
use tracing::trace;

use crate::{
	compare::translation_map,
	container::{BoolContainer, EnumContainer},
};

/// Row wise equality of two enum columns of the same length. Columns over
/// the same dictionary instance compare raw indices; otherwise the left
/// index space is translated into the right one. Rows undefined on either
/// side compare as undefined, undefined never equals undefined.
pub fn equal(left: &EnumContainer, right: &EnumContainer) -> Result<BoolContainer> {
	if left.len() != right.len() {
		return_internal_error!("row counts diverge: {} vs {} rows", left.len(), right.len());
	}
	let expected = left.dictionary().value_type();
	let actual = right.dictionary().value_type();
	if expected != actual {
		return err!(dictionary_value_type_mismatch(expected, actual));
	}

	let mut result = BoolContainer::with_capacity(left.len());
	if Arc::ptr_eq(left.dictionary(), right.dictionary()) {
		for position in 0..left.len() {
			match (left.index_at(position), right.index_at(position)) {
				(Some(l), Some(r)) => result.push(l == r),
				_ => result.push_undefined(),
			}
		}
		return Ok(result);
	}

	trace!("distinct dictionary instances, comparing through a translation map");
	let translation = translation_map(left.dictionary(), right.dictionary());
	for position in 0..left.len() {
		match (left.index_at(position), right.index_at(position)) {
			(Some(l), Some(r)) => {
				let translated = translation.get(l as usize).copied().flatten();
				result.push(translated == Some(r));
			}
			_ => result.push_undefined(),
		}
	}
	Ok(result)
}

/// Compares every row of a column against one literal. An undefined
/// literal yields an all undefined result; a literal the dictionary has
/// never seen yields false for every defined row.
pub fn equal_value(column: &EnumContainer, value: &Value) -> Result<BoolContainer> {
	let mut result = BoolContainer::with_capacity(column.len());
	if value.is_undefined() {
		for _ in 0..column.len() {
			result.push_undefined();
		}
		return Ok(result);
	}
	let expected = column.dictionary().value_type();
	let actual = value.get_type();
	if expected != actual {
		return err!(dictionary_value_type_mismatch(expected, actual));
	}

	let target = column.dictionary().lookup(value);
	for position in 0..column.len() {
		match column.index_at(position) {
			Some(index) => result.push(target == Some(index)),
			None => result.push_undefined(),
		}
	}
	Ok(result)
}
