// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use cardinal_type::BitVec;
use serde::{Deserialize, Serialize};

/// Boolean column values next to their validity bitmap. Bits of undefined
/// rows are zero and carry no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	values: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(values: BitVec, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values,
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: BitVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_values(values: impl IntoIterator<Item = bool>) -> Self {
		let values: BitVec = values.into_iter().collect();
		let bitvec = BitVec::repeat(values.len(), true);
		Self {
			values,
			bitvec,
		}
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn values(&self) -> &BitVec {
		&self.values
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn is_defined(&self, index: usize) -> bool {
		self.bitvec.get(index)
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if index < self.len() && self.bitvec.get(index) {
			Some(self.values.get(index))
		} else {
			None
		}
	}

	pub fn push(&mut self, value: bool) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(false);
		self.bitvec.push(false);
	}

	pub fn as_string(&self, index: usize) -> String {
		match self.get(index) {
			Some(value) => value.to_string(),
			None => "undefined".to_string(),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		(0..self.len()).map(|index| self.get(index))
	}

	/// Rows whose value is defined and true. This is the mask shape the
	/// filter operations consume, undefined never passes.
	pub fn to_mask(&self) -> BitVec {
		(0..self.len()).map(|index| self.get(index) == Some(true)).collect()
	}

	pub fn extend(&mut self, other: &BoolContainer) {
		self.values.extend(&other.values);
		self.bitvec.extend(&other.bitvec);
	}

	pub fn filter(&self, mask: &BitVec) -> BoolContainer {
		let mut container = BoolContainer::with_capacity(mask.count_ones());
		for index in 0..self.len() {
			if mask.get(index) {
				match self.get(index) {
					Some(value) => container.push(value),
					None => container.push_undefined(),
				}
			}
		}
		container
	}

	pub fn reorder(&self, positions: &[usize]) -> BoolContainer {
		let mut container = BoolContainer::with_capacity(positions.len());
		for &position in positions {
			match self.get(position) {
				Some(value) => container.push(value),
				None => container.push_undefined(),
			}
		}
		container
	}

	pub fn slice(&self, offset: usize, length: usize) -> BoolContainer {
		Self {
			values: self.values.slice(offset, offset + length),
			bitvec: self.bitvec.slice(offset, offset + length),
		}
	}
}
