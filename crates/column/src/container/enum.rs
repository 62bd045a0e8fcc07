// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use std::sync::Arc;

use cardinal_type::{
	BitVec, EnumWidth, Result, Type, Value, err,
	error::diagnostic::{column::undefined_value_access, dictionary::dictionary_index_out_of_range},
	return_internal_error,
};
use serde::{Deserialize, Serialize};

use crate::{dictionary::Dictionary, index::IndexData};

/// A dictionary encoded column: one index per row into a shared
/// [`Dictionary`], next to a validity bitmap. Indices of undefined rows
/// are zero and carry no meaning.
///
/// The index buffer starts at the width the dictionary needs and is
/// promoted in place whenever an appended index would not fit, so rows
/// written before a promotion never move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumContainer {
	dictionary: Arc<Dictionary>,
	indices: IndexData,
	bitvec: BitVec,
}

impl EnumContainer {
	pub fn new(dictionary: Arc<Dictionary>) -> Self {
		Self::with_capacity(dictionary, 0)
	}

	pub fn with_capacity(dictionary: Arc<Dictionary>, capacity: usize) -> Self {
		let width = dictionary.width();
		Self {
			dictionary,
			indices: IndexData::with_capacity(width, capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	/// Assembles a column from raw parts. Every defined row must address
	/// an existing dictionary entry.
	pub fn from_parts(dictionary: Arc<Dictionary>, indices: IndexData, bitvec: BitVec) -> Result<Self> {
		if indices.len() != bitvec.len() {
			return_internal_error!(
				"index and validity lengths diverge: {} indices, {} validity bits",
				indices.len(),
				bitvec.len()
			);
		}
		let cardinality = dictionary.cardinality();
		for (position, index) in indices.iter().enumerate() {
			if bitvec.get(position) && index as u64 >= cardinality {
				return err!(dictionary_index_out_of_range(index, cardinality));
			}
		}
		Ok(Self {
			dictionary,
			indices,
			bitvec,
		})
	}

	pub fn dictionary(&self) -> &Arc<Dictionary> {
		&self.dictionary
	}

	pub fn indices(&self) -> &IndexData {
		&self.indices
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn len(&self) -> usize {
		self.indices.len()
	}

	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	/// The physical width of this column's index buffer. It may lag the
	/// dictionary's width when other columns grew the shared dictionary.
	pub fn width(&self) -> EnumWidth {
		self.indices.width()
	}

	pub fn get_type(&self) -> Type {
		Type::Enum(self.indices.width())
	}

	pub fn is_defined(&self, index: usize) -> bool {
		self.bitvec.get(index)
	}

	/// The raw dictionary index at `index`, `None` for undefined rows.
	pub fn index_at(&self, index: usize) -> Option<u32> {
		if self.bitvec.get(index) {
			self.indices.get(index)
		} else {
			None
		}
	}

	/// The decoded value at `index`, `None` for undefined or out of range
	/// rows.
	pub fn get(&self, index: usize) -> Option<Value> {
		self.index_at(index).and_then(|entry| self.dictionary.get(entry))
	}

	/// The decoded value at `index`, with undefined rows as
	/// [`Value::Undefined`].
	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).unwrap_or(Value::Undefined)
	}

	/// The decoded value at `index`, failing with `COLUMN_002` when the
	/// row is undefined.
	pub fn value_at(&self, index: usize) -> Result<Value> {
		if index >= self.len() {
			return_internal_error!("row {} out of bounds, column has {} rows", index, self.len());
		}
		match self.index_at(index) {
			Some(entry) => self.dictionary.value_at(entry),
			None => err!(undefined_value_access(index)),
		}
	}

	/// Appends a value, extending the dictionary when it is absent and
	/// promoting the index width when the new index does not fit.
	pub fn push_value(&mut self, value: Value) -> Result<()> {
		if value.is_undefined() {
			self.push_undefined();
			return Ok(());
		}
		let index = self.dictionary.extend(value)?;
		self.indices.ensure_fits(index);
		self.indices.push(index);
		self.bitvec.push(true);
		Ok(())
	}

	pub fn push_undefined(&mut self) {
		self.indices.push(0);
		self.bitvec.push(false);
	}

	/// Overwrites the row at `index` with a value, extending the
	/// dictionary when it is absent.
	pub fn set_value(&mut self, index: usize, value: Value) -> Result<()> {
		if index >= self.len() {
			return_internal_error!("row {} out of bounds, column has {} rows", index, self.len());
		}
		if value.is_undefined() {
			self.indices.set(index, 0);
			self.bitvec.set(index, false);
			return Ok(());
		}
		let entry = self.dictionary.extend(value)?;
		self.indices.ensure_fits(entry);
		self.indices.set(index, entry);
		self.bitvec.set(index, true);
		Ok(())
	}

	/// Appends every row of `other`. Columns over the same dictionary
	/// instance append raw indices; otherwise rows are re-encoded against
	/// this column's dictionary, extending it as needed.
	pub fn extend(&mut self, other: &EnumContainer) -> Result<()> {
		if Arc::ptr_eq(&self.dictionary, &other.dictionary) {
			self.indices.extend(&other.indices);
			self.bitvec.extend(&other.bitvec);
			return Ok(());
		}
		for position in 0..other.len() {
			match other.get(position) {
				Some(value) => self.push_value(value)?,
				None => self.push_undefined(),
			}
		}
		Ok(())
	}

	pub fn as_string(&self, index: usize) -> String {
		self.get_value(index).to_string()
	}

	/// Decoded values in row order, undefined rows as
	/// [`Value::Undefined`]. Snapshots the dictionary once up front.
	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		let values = self.dictionary.values();
		(0..self.len()).map(move |position| match self.index_at(position) {
			Some(entry) => values.get(entry as usize).cloned().unwrap_or(Value::Undefined),
			None => Value::Undefined,
		})
	}

	pub fn filter(&self, mask: &BitVec) -> EnumContainer {
		Self {
			dictionary: Arc::clone(&self.dictionary),
			indices: self.indices.filter(mask),
			bitvec: self.bitvec.iter().enumerate().filter(|(position, _)| mask.get(*position)).map(|(_, bit)| bit).collect(),
		}
	}

	/// Rows rearranged to `positions`; positions past the end produce
	/// undefined rows.
	pub fn reorder(&self, positions: &[usize]) -> EnumContainer {
		let mut indices = IndexData::with_capacity(self.width(), positions.len());
		let mut bitvec = BitVec::with_capacity(positions.len());
		for &position in positions {
			match self.index_at(position) {
				Some(entry) => {
					indices.push(entry);
					bitvec.push(true);
				}
				None => {
					indices.push(0);
					bitvec.push(false);
				}
			}
		}
		Self {
			dictionary: Arc::clone(&self.dictionary),
			indices,
			bitvec,
		}
	}

	pub fn slice(&self, offset: usize, length: usize) -> EnumContainer {
		Self {
			dictionary: Arc::clone(&self.dictionary),
			indices: self.indices.slice(offset, length),
			bitvec: self.bitvec.slice(offset, offset + length),
		}
	}
}
