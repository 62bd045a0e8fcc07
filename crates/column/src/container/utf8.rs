// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use cardinal_type::{BitVec, CowVec};
use serde::{Deserialize, Serialize};

/// String column values next to their validity bitmap. Undefined rows hold
/// an empty string that carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	values: CowVec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new(values: CowVec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values,
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_values(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		let values: CowVec<String> = values.into_iter().map(Into::into).collect();
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

	pub fn values(&self) -> &CowVec<String> {
		&self.values
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn is_defined(&self, index: usize) -> bool {
		self.bitvec.get(index)
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if self.bitvec.get(index) {
			self.values.get(index).map(String::as_str)
		} else {
			None
		}
	}

	pub fn push(&mut self, value: impl Into<String>) {
		self.values.push(value.into());
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(String::new());
		self.bitvec.push(false);
	}

	pub fn as_string(&self, index: usize) -> String {
		match self.get(index) {
			Some(value) => value.to_string(),
			None => "undefined".to_string(),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		(0..self.len()).map(|index| self.get(index))
	}

	pub fn extend(&mut self, other: &Utf8Container) {
		self.values.extend_from_slice(other.values.as_slice());
		self.bitvec.extend(&other.bitvec);
	}

	pub fn filter(&self, mask: &BitVec) -> Utf8Container {
		let mut container = Utf8Container::with_capacity(mask.count_ones());
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

	pub fn reorder(&self, positions: &[usize]) -> Utf8Container {
		let mut container = Utf8Container::with_capacity(positions.len());
		for &position in positions {
			match self.get(position) {
				Some(value) => container.push(value),
				None => container.push_undefined(),
			}
		}
		container
	}

	pub fn slice(&self, offset: usize, length: usize) -> Utf8Container {
		Self {
			values: self.values.as_slice()[offset..offset + length].iter().cloned().collect(),
			bitvec: self.bitvec.slice(offset, offset + length),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut container = Utf8Container::with_capacity(2);
		container.push("small");
		container.push_undefined();
		assert_eq!(container.get(0), Some("small"));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), None);
	}

	#[test]
	fn test_as_string() {
		let mut container = Utf8Container::from_values(["medium"]);
		container.push_undefined();
		assert_eq!(container.as_string(0), "medium");
		assert_eq!(container.as_string(1), "undefined");
	}

	#[test]
	fn test_extend() {
		let mut container = Utf8Container::from_values(["a"]);
		let mut other = Utf8Container::from_values(["b"]);
		other.push_undefined();
		container.extend(&other);
		assert_eq!(container.len(), 3);
		assert_eq!(container.get(1), Some("b"));
		assert_eq!(container.get(2), None);
	}

	#[test]
	fn test_slice() {
		let container = Utf8Container::from_values(["a", "b", "c", "d"]);
		let slice = container.slice(1, 2);
		assert_eq!(slice.len(), 2);
		assert_eq!(slice.get(0), Some("b"));
		assert_eq!(slice.get(1), Some("c"));
	}

	#[test]
	fn test_serde_round_trip() {
		let mut container = Utf8Container::from_values(["a", "b"]);
		container.push_undefined();
		let json = serde_json::to_string(&container).unwrap();
		let back: Utf8Container = serde_json::from_str(&json).unwrap();
		assert_eq!(container, back);
	}
}
