// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use cardinal_bridge::{CategoricalArray, ChunkCursor, ingest, materialize};
use cardinal_column::{ColumnData, cast::to_text, compare::equal_value, join::equi_join};
use cardinal_type::{BitVec, CowVec, Type, Value};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn utf8_array(categories: &[&str], codes: Vec<u32>, validity: Vec<bool>) -> CategoricalArray {
	CategoricalArray::new(
		categories.iter().map(|v| Value::utf8(*v)).collect(),
		false,
		CowVec::new(codes),
		BitVec::from_slice(&validity),
	)
	.unwrap()
}

#[test]
fn test_random_arrays_round_trip_bit_for_bit() {
	let mut rng = StdRng::seed_from_u64(0x5EED);
	for _ in 0..50 {
		let cardinality = rng.random_range(1..40usize);
		let categories: Vec<Value> = (0..cardinality).map(|i| Value::utf8(format!("cat-{i}"))).collect();
		let rows = rng.random_range(0..200usize);
		let mut codes = Vec::with_capacity(rows);
		let mut validity = Vec::with_capacity(rows);
		for _ in 0..rows {
			if rng.random_bool(0.2) {
				// junk code on an invalid row, normalized on construction
				codes.push(rng.random_range(0u32..1000));
				validity.push(false);
			} else {
				codes.push(rng.random_range(0..cardinality) as u32);
				validity.push(true);
			}
		}
		let array = CategoricalArray::new(
			categories,
			false,
			CowVec::new(codes),
			BitVec::from_slice(&validity),
		)
		.unwrap();

		let column = ingest(&array).unwrap();
		assert_eq!(column.len(), array.len());
		assert_eq!(materialize(&column), array);
	}
}

#[test]
fn test_numeric_categories_round_trip() {
	let ints = CategoricalArray::new(
		(0..12).map(|i| Value::int8(i * 11)).collect(),
		false,
		CowVec::new(vec![0, 11, 5]),
		BitVec::from_slice(&[true, true, true]),
	)
	.unwrap();
	let column = ingest(&ints).unwrap();
	assert_eq!(column.dictionary().value_type(), Type::Int8);
	assert_eq!(column.get_value(1), Value::int8(121));
	assert_eq!(materialize(&column), ints);

	let floats = CategoricalArray::new(
		(0..8).map(|i| Value::float8(i as f64 / 4.0)).collect(),
		true,
		CowVec::new(vec![4, 0]),
		BitVec::from_slice(&[true, false]),
	)
	.unwrap();
	let column = ingest(&floats).unwrap();
	assert_eq!(column.dictionary().value_type(), Type::Float8);
	assert_eq!(column.get_value(0), Value::float8(1.0));
	assert_eq!(materialize(&column), floats);
}

#[test]
fn test_ordered_flag_survives_the_round_trip() {
	let array = CategoricalArray::new(
		vec![Value::utf8("low"), Value::utf8("high")],
		true,
		CowVec::new(vec![0, 1]),
		BitVec::from_slice(&[true, true]),
	)
	.unwrap();
	let column = ingest(&array).unwrap();
	assert!(column.dictionary().is_ordered());
	assert!(materialize(&column).is_ordered());
}

#[test]
fn test_streaming_an_ingested_column_in_chunks() {
	let rows = 2500usize;
	let categories = ["a", "b", "c", "d", "e", "f", "g"];
	let codes: Vec<u32> = (0..rows).map(|row| (row % categories.len()) as u32).collect();
	let validity: Vec<bool> = (0..rows).map(|row| row % 13 != 0).collect();
	let array = utf8_array(&categories, codes, validity);

	let column = ingest(&array).unwrap();
	let mut cursor = ChunkCursor::new(&column);

	let first = cursor.fetch();
	let second = cursor.fetch();
	let third = cursor.fetch();
	let empty = cursor.fetch();
	assert_eq!(first.len(), 1024);
	assert_eq!(second.len(), 1024);
	assert_eq!(third.len(), 452);
	assert_eq!(empty.len(), 0);
	assert_eq!(empty.categories().len(), categories.len());

	// reassembling the chunks reproduces the source array
	let mut codes = Vec::new();
	let mut validity = Vec::new();
	for chunk in [&first, &second, &third] {
		codes.extend(chunk.codes().iter().copied());
		validity.extend(chunk.validity().iter());
	}
	let reassembled = CategoricalArray::new(
		first.categories().to_vec(),
		first.is_ordered(),
		CowVec::new(codes),
		validity.into_iter().collect(),
	)
	.unwrap();
	assert_eq!(reassembled, array);
}

#[test]
fn test_host_scenario_filter_insert_render() {
	// the host hands over a sizes column with a hole in it
	let array = utf8_array(
		&["small", "medium", "large"],
		vec![0, 1, 0, 2, 0],
		vec![true, true, false, true, true],
	);
	let mut sizes = ingest(&array).unwrap();

	// filter by a literal, undefined rows never pass
	let matches = equal_value(&sizes, &Value::utf8("small")).unwrap();
	let small = sizes.filter(&matches.to_mask());
	assert_eq!(small.len(), 2);

	// a literal the column has never seen matches nothing and leaves
	// the dictionary alone
	let absent = equal_value(&sizes, &Value::utf8("tiny")).unwrap();
	assert_eq!(absent.to_mask().count_ones(), 0);
	assert_eq!(sizes.dictionary().cardinality(), 3);

	// inserting a new value extends the dictionary in place
	sizes.push_value(Value::utf8("extra large")).unwrap();
	assert_eq!(sizes.dictionary().cardinality(), 4);

	// rendering decodes through the dictionary
	let text = to_text(&ColumnData::Enum(sizes.clone()));
	assert_eq!(text.as_string(0), "small");
	assert_eq!(text.as_string(2), "undefined");
	assert_eq!(text.as_string(5), "extra large");

	// handing the column back reflects the extension
	let back = materialize(&sizes);
	assert_eq!(back.categories().len(), 4);
	assert_eq!(back.value(5), Value::utf8("extra large"));
}

#[test]
fn test_join_between_two_ingested_tables() {
	// both hosts encoded their keys independently, indices differ
	let orders = ingest(&utf8_array(&["eur", "usd"], vec![0, 1, 0], vec![true; 3])).unwrap();
	let rates = ingest(&utf8_array(&["usd", "gbp", "eur"], vec![0, 1, 2], vec![true; 3])).unwrap();

	let pairs = equi_join(&orders, &rates).unwrap();
	assert_eq!(pairs, vec![(0, 2), (1, 0), (2, 2)]);
}
