// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use cardinal_type::{BitVec, Result, Type, Value, err, error::diagnostic::column::column_value_type_mismatch};
use serde::{Deserialize, Serialize};

use crate::container::{BoolContainer, EnumContainer, Utf8Container};

/// A column of row values in one of the supported physical layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Utf8(Utf8Container),
	Enum(EnumContainer),
}

impl ColumnData {
	pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_values(values))
	}

	pub fn bool_with_bitvec(values: impl IntoIterator<Item = bool>, bitvec: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::new(values.into_iter().collect(), bitvec.into_iter().collect()))
	}

	pub fn utf8(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		ColumnData::Utf8(Utf8Container::from_values(values))
	}

	pub fn utf8_with_bitvec(
		values: impl IntoIterator<Item = impl Into<String>>,
		bitvec: impl IntoIterator<Item = bool>,
	) -> Self {
		ColumnData::Utf8(Utf8Container::new(
			values.into_iter().map(Into::into).collect(),
			bitvec.into_iter().collect(),
		))
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Enum(container) => container.get_type(),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(container) => container.len(),
			ColumnData::Utf8(container) => container.len(),
			ColumnData::Enum(container) => container.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(container) => container.is_defined(index),
			ColumnData::Utf8(container) => container.is_defined(index),
			ColumnData::Enum(container) => container.is_defined(index),
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(container) => container.get(index).map(Value::Boolean).unwrap_or(Value::Undefined),
			ColumnData::Utf8(container) => container.get(index).map(Value::utf8).unwrap_or(Value::Undefined),
			ColumnData::Enum(container) => container.get_value(index),
		}
	}

	pub fn as_string(&self, index: usize) -> String {
		match self {
			ColumnData::Bool(container) => container.as_string(index),
			ColumnData::Utf8(container) => container.as_string(index),
			ColumnData::Enum(container) => container.as_string(index),
		}
	}

	/// Row values in order, undefined rows as [`Value::Undefined`].
	pub fn iter(&self) -> Box<dyn Iterator<Item = Value> + '_> {
		match self {
			ColumnData::Bool(container) => {
				Box::new(container.iter().map(|value| value.map(Value::Boolean).unwrap_or(Value::Undefined)))
			}
			ColumnData::Utf8(container) => {
				Box::new(container.iter().map(|value| value.map(Value::utf8).unwrap_or(Value::Undefined)))
			}
			ColumnData::Enum(container) => Box::new(container.iter()),
		}
	}

	/// Appends a value. Undefined appends an undefined row to any layout;
	/// anything else must match the column's value type.
	pub fn push_value(&mut self, value: Value) -> Result<()> {
		match (self, value) {
			(ColumnData::Bool(container), Value::Undefined) => {
				container.push_undefined();
				Ok(())
			}
			(ColumnData::Bool(container), Value::Boolean(value)) => {
				container.push(value);
				Ok(())
			}
			(ColumnData::Utf8(container), Value::Undefined) => {
				container.push_undefined();
				Ok(())
			}
			(ColumnData::Utf8(container), Value::Utf8(value)) => {
				container.push(value);
				Ok(())
			}
			(ColumnData::Enum(container), value) => container.push_value(value),
			(column, value) => err!(column_value_type_mismatch(column.get_type(), value.get_type())),
		}
	}

	/// Appends every row of `other`, which must share this column's
	/// layout.
	pub fn extend(&mut self, other: &ColumnData) -> Result<()> {
		match (self, other) {
			(ColumnData::Bool(container), ColumnData::Bool(other)) => {
				container.extend(other);
				Ok(())
			}
			(ColumnData::Utf8(container), ColumnData::Utf8(other)) => {
				container.extend(other);
				Ok(())
			}
			(ColumnData::Enum(container), ColumnData::Enum(other)) => container.extend(other),
			(column, other) => err!(column_value_type_mismatch(column.get_type(), other.get_type())),
		}
	}

	pub fn filter(&self, mask: &BitVec) -> ColumnData {
		match self {
			ColumnData::Bool(container) => ColumnData::Bool(container.filter(mask)),
			ColumnData::Utf8(container) => ColumnData::Utf8(container.filter(mask)),
			ColumnData::Enum(container) => ColumnData::Enum(container.filter(mask)),
		}
	}

	pub fn reorder(&self, positions: &[usize]) -> ColumnData {
		match self {
			ColumnData::Bool(container) => ColumnData::Bool(container.reorder(positions)),
			ColumnData::Utf8(container) => ColumnData::Utf8(container.reorder(positions)),
			ColumnData::Enum(container) => ColumnData::Enum(container.reorder(positions)),
		}
	}

	pub fn slice(&self, offset: usize, length: usize) -> ColumnData {
		match self {
			ColumnData::Bool(container) => ColumnData::Bool(container.slice(offset, length)),
			ColumnData::Utf8(container) => ColumnData::Utf8(container.slice(offset, length)),
			ColumnData::Enum(container) => ColumnData::Enum(container.slice(offset, length)),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use cardinal_type::EnumWidth;

	use super::*;
	use crate::dictionary::Dictionary;

	fn enum_column(values: &[Option<&str>]) -> ColumnData {
		let dictionary = Arc::new(Dictionary::new(Type::Utf8));
		let mut container = EnumContainer::new(dictionary);
		for value in values {
			match value {
				Some(value) => container.push_value(Value::utf8(*value)).unwrap(),
				None => container.push_undefined(),
			}
		}
		ColumnData::Enum(container)
	}

	#[test]
	fn test_get_type() {
		assert_eq!(ColumnData::bool([true]).get_type(), Type::Boolean);
		assert_eq!(ColumnData::utf8(["a"]).get_type(), Type::Utf8);
		assert_eq!(enum_column(&[Some("a")]).get_type(), Type::Enum(EnumWidth::Uint1));
	}

	#[test]
	fn test_push_value() {
		let mut column = ColumnData::utf8(["a"]);
		column.push_value(Value::utf8("b")).unwrap();
		column.push_value(Value::Undefined).unwrap();
		assert_eq!(column.len(), 3);
		assert_eq!(column.get_value(1), Value::utf8("b"));
		assert_eq!(column.get_value(2), Value::Undefined);
	}

	#[test]
	fn test_push_value_rejects_wrong_type() {
		let mut column = ColumnData::bool([true]);
		let err = column.push_value(Value::utf8("a")).unwrap_err();
		assert_eq!(err.code(), "COLUMN_003");
	}

	#[test]
	fn test_extend_rejects_layout_mismatch() {
		let mut column = ColumnData::utf8(["a"]);
		let other = ColumnData::bool([true]);
		let err = column.extend(&other).unwrap_err();
		assert_eq!(err.code(), "COLUMN_003");
	}

	#[test]
	fn test_iter_over_mixed_definedness() {
		let column = ColumnData::utf8_with_bitvec(["a", "", "c"], [true, false, true]);
		let values: Vec<Value> = column.iter().collect();
		assert_eq!(values, vec![Value::utf8("a"), Value::Undefined, Value::utf8("c")]);
	}

	#[test]
	fn test_filter() {
		let column = enum_column(&[Some("a"), Some("b"), None]);
		let mask = BitVec::from_slice(&[true, false, true]);
		let filtered = column.filter(&mask);
		assert_eq!(filtered.len(), 2);
		assert_eq!(filtered.get_value(0), Value::utf8("a"));
		assert_eq!(filtered.get_value(1), Value::Undefined);
	}

	#[test]
	fn test_slice_and_reorder() {
		let column = ColumnData::utf8(["a", "b", "c"]);
		let slice = column.slice(1, 2);
		assert_eq!(slice.get_value(0), Value::utf8("b"));
		let reordered = column.reorder(&[2, 0]);
		assert_eq!(reordered.get_value(0), Value::utf8("c"));
		assert_eq!(reordered.get_value(1), Value::utf8("a"));
	}

	#[test]
	fn test_serde_round_trip() {
		let column = enum_column(&[Some("a"), None]);
		let json = serde_json::to_string(&column).unwrap();
		let back: ColumnData = serde_json::from_str(&json).unwrap();
		assert_eq!(column, back);
	}
}
