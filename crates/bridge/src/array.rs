// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use std::collections::HashSet;

use cardinal_type::{BitVec, CowVec, Type, Value};
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Categorical data as hosts exchange it: every distinct category once,
/// one code per row pointing into the categories, and a validity bitmap.
/// Codes of invalid rows are normalized to zero on construction, so two
/// arrays holding the same data compare equal bit for bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalArray {
	categories: Vec<Value>,
	ordered: bool,
	codes: CowVec<u32>,
	validity: BitVec,
}

impl CategoricalArray {
	/// Validates host supplied parts. Categories must be distinct, defined
	/// and of one value type; every valid row's code must address a
	/// category.
	pub fn new(
		categories: Vec<Value>,
		ordered: bool,
		codes: CowVec<u32>,
		validity: BitVec,
	) -> Result<Self, BridgeError> {
		if codes.len() != validity.len() {
			return Err(BridgeError::LengthMismatch {
				codes: codes.len(),
				validity: validity.len(),
			});
		}
		let mut seen = HashSet::with_capacity(categories.len());
		let mut first_type = None;
		for (index, category) in categories.iter().enumerate() {
			if category.is_undefined() {
				return Err(BridgeError::UndefinedCategory {
					index,
				});
			}
			match first_type {
				None => first_type = Some(category.get_type()),
				Some(first) if first != category.get_type() => {
					return Err(BridgeError::MixedCategoryTypes {
						first,
						second: category.get_type(),
					});
				}
				Some(_) => {}
			}
			if !seen.insert(category) {
				return Err(BridgeError::DuplicateCategory {
					index,
				});
			}
		}
		let mut codes = codes;
		for row in 0..codes.len() {
			let code = codes[row];
			if validity.get(row) {
				if code as usize >= categories.len() {
					return Err(BridgeError::CodeOutOfRange {
						code,
						row,
						cardinality: categories.len(),
					});
				}
			} else if code != 0 {
				codes.set(row, 0);
			}
		}
		Ok(Self {
			categories,
			ordered,
			codes,
			validity,
		})
	}

	/// Assembles an array the engine itself produced, already normalized.
	pub(crate) fn from_parts(categories: Vec<Value>, ordered: bool, codes: CowVec<u32>, validity: BitVec) -> Self {
		debug_assert_eq!(codes.len(), validity.len());
		Self {
			categories,
			ordered,
			codes,
			validity,
		}
	}

	pub fn categories(&self) -> &[Value] {
		&self.categories
	}

	pub fn is_ordered(&self) -> bool {
		self.ordered
	}

	pub fn codes(&self) -> &CowVec<u32> {
		&self.codes
	}

	pub fn validity(&self) -> &BitVec {
		&self.validity
	}

	/// The value type of the categories; empty arrays default to
	/// [`Type::Utf8`].
	pub fn value_type(&self) -> Type {
		self.categories.first().map(Value::get_type).unwrap_or(Type::Utf8)
	}

	pub fn len(&self) -> usize {
		self.codes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}

	pub fn null_count(&self) -> usize {
		self.len() - self.validity.count_ones()
	}

	/// The decoded value of one row, invalid rows as [`Value::Undefined`].
	pub fn value(&self, row: usize) -> Value {
		if row < self.len() && self.validity.get(row) {
			self.categories.get(self.codes[row] as usize).cloned().unwrap_or(Value::Undefined)
		} else {
			Value::Undefined
		}
	}
}
