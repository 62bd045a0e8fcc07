// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use std::sync::Arc;

use cardinal_type::{BitVec, Result, Value, return_internal_error};
use tracing::instrument;

use crate::{container::EnumContainer, data::ColumnData, dictionary::Dictionary, index::IndexData};

/// Encodes a column against `dictionary`, extending it with values it has
/// not seen. Runs in two phases: all distinct values are resolved in one
/// atomic batch first, so a failing row leaves the dictionary untouched
/// and no partially encoded column behind.
#[instrument(name = "cast::to_enum", level = "debug", skip(data, dictionary), fields(value_type = %data.get_type(), rows = data.len()))]
pub fn to_enum(data: &ColumnData, dictionary: &Arc<Dictionary>) -> Result<ColumnData> {
	if let ColumnData::Enum(container) = data {
		if Arc::ptr_eq(container.dictionary(), dictionary) {
			return Ok(data.clone());
		}
	}

	// phase one: resolve every defined value to an index
	let defined: Vec<Value> = data.iter().filter(|value| !value.is_undefined()).collect();
	let resolved = dictionary.extend_all(&defined)?;

	// phase two: lay out the rows
	let mut indices = IndexData::with_capacity(dictionary.width(), data.len());
	let mut bitvec = BitVec::with_capacity(data.len());
	let mut next = resolved.into_iter();
	for value in data.iter() {
		if value.is_undefined() {
			indices.push(0);
			bitvec.push(false);
		} else {
			// phase one produced one index per defined row
			match next.next() {
				Some(index) => {
					indices.ensure_fits(index);
					indices.push(index);
					bitvec.push(true);
				}
				None => return_internal_error!("resolved index stream shorter than defined rows"),
			}
		}
	}
	Ok(ColumnData::Enum(EnumContainer::from_parts(Arc::clone(dictionary), indices, bitvec)?))
}
