// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use std::sync::Arc;

use cardinal_column::{Dictionary, EnumContainer, IndexData};
use cardinal_type::{BitVec, CowVec, Result};
use tracing::instrument;

use crate::array::CategoricalArray;

/// Turns a host categorical array into an engine column. The categories
/// become the dictionary, in their host order, and the codes become the
/// index buffer at the narrowest width that covers them.
#[instrument(name = "bridge::ingest", level = "debug", skip(array), fields(rows = array.len(), categories = array.categories().len()))]
pub fn ingest(array: &CategoricalArray) -> Result<EnumContainer> {
	let dictionary =
		Dictionary::build(array.value_type(), array.is_ordered(), array.categories().iter().cloned())?;
	let mut indices = IndexData::with_capacity(dictionary.width(), array.len());
	for code in array.codes().iter() {
		indices.push(*code);
	}
	EnumContainer::from_parts(Arc::new(dictionary), indices, array.validity().clone())
}

/// Turns an engine column back into a host categorical array. The inverse
/// of [`ingest`]: codes of undefined rows come out as zero, which is the
/// normalized form [`CategoricalArray::new`] produces, so a round trip
/// reproduces the array bit for bit.
#[instrument(name = "bridge::materialize", level = "debug", skip(column), fields(rows = column.len()))]
pub fn materialize(column: &EnumContainer) -> CategoricalArray {
	let categories = column.dictionary().values();
	let ordered = column.dictionary().is_ordered();
	let mut codes = CowVec::with_capacity(column.len());
	let mut validity = BitVec::with_capacity(column.len());
	for position in 0..column.len() {
		match column.index_at(position) {
			Some(index) => {
				codes.push(index);
				validity.push(true);
			}
			None => {
				codes.push(0);
				validity.push(false);
			}
		}
	}
	CategoricalArray::from_parts(categories, ordered, codes, validity)
}

#[cfg(test)]
mod tests {
	use cardinal_type::{BitVec, EnumWidth, Type, Value};

	use super::*;

	fn array(categories: &[&str], codes: Vec<u32>, validity: Vec<bool>) -> CategoricalArray {
		CategoricalArray::new(
			categories.iter().map(|v| Value::utf8(*v)).collect(),
			true,
			CowVec::new(codes),
			BitVec::from_slice(&validity),
		)
		.unwrap()
	}

	#[test]
	fn test_ingest() {
		let array = array(&["s", "m", "l"], vec![2, 0, 0, 1], vec![true, true, false, true]);
		let column = ingest(&array).unwrap();

		assert_eq!(column.len(), 4);
		assert_eq!(column.get_type(), Type::Enum(EnumWidth::Uint1));
		assert_eq!(column.dictionary().cardinality(), 3);
		assert!(column.dictionary().is_ordered());
		assert_eq!(column.get_value(0), Value::utf8("l"));
		assert_eq!(column.get_value(2), Value::Undefined);
		assert_eq!(column.index_at(3), Some(1));
	}

	#[test]
	fn test_ingest_rejects_duplicate_categories_upstream() {
		// CategoricalArray::new is the validation point; building one
		// from raw parts with duplicates is impossible by construction
		let err = CategoricalArray::new(
			vec![Value::utf8("s"), Value::utf8("s")],
			false,
			CowVec::with_capacity(0),
			BitVec::new(),
		)
		.unwrap_err();
		assert_eq!(err.code(), "BRIDGE_002");
	}

	#[test]
	fn test_materialize_normalizes_undefined_codes() {
		let dictionary = Arc::new(Dictionary::new(Type::Utf8));
		let mut column = EnumContainer::new(dictionary);
		column.push_value(Value::utf8("m")).unwrap();
		column.push_undefined();

		let array = materialize(&column);
		assert_eq!(array.codes().as_slice(), &[0, 0]);
		assert!(array.validity().get(0));
		assert!(!array.validity().get(1));
	}

	#[test]
	fn test_round_trip_is_bit_for_bit() {
		let original = array(&["s", "m", "l"], vec![1, 7, 2, 0], vec![true, false, true, true]);
		let back = materialize(&ingest(&original).unwrap());
		// the dead code 7 was normalized to 0 on construction already
		assert_eq!(original, back);
	}

	#[test]
	fn test_round_trip_preserves_unreferenced_categories() {
		let original = array(&["s", "m", "l"], vec![0], vec![true]);
		let back = materialize(&ingest(&original).unwrap());
		assert_eq!(back.categories().len(), 3);
		assert_eq!(original, back);
	}

	#[test]
	fn test_ingest_int_categories() {
		let array = CategoricalArray::new(
			vec![Value::int8(10), Value::int8(20)],
			false,
			CowVec::new(vec![1, 0]),
			BitVec::from_slice(&[true, true]),
		)
		.unwrap();
		let column = ingest(&array).unwrap();
		assert_eq!(column.dictionary().value_type(), Type::Int8);
		assert_eq!(column.get_value(0), Value::int8(20));
	}

	#[test]
	fn test_ingest_empty_array() {
		let array = CategoricalArray::new(Vec::new(), false, CowVec::with_capacity(0), BitVec::new()).unwrap();
		let column = ingest(&array).unwrap();
		assert!(column.is_empty());
		assert_eq!(column.dictionary().cardinality(), 0);
	}
}
