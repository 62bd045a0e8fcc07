// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

mod catalog;

use std::fmt::{self, Debug, Formatter};

pub use catalog::{DictionaryCatalog, DictionaryId};
use cardinal_type::{
	EnumWidth, Result, Type, Value, err,
	error::diagnostic::dictionary::{
		dictionary_capacity_exceeded, dictionary_index_out_of_range, dictionary_value_type_mismatch,
	},
};
use indexmap::IndexSet;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// An ordered set of distinct values, each addressed by the dense `u32`
/// index of its first appearance. Extension appends, it never renumbers:
/// an index handed out once stays valid for the dictionary's lifetime.
///
/// All entries share one value type. Interior mutability lets columns
/// extend a shared dictionary behind an `Arc`; extension is serialized
/// through a write lock.
pub struct Dictionary {
	value_type: Type,
	ordered: bool,
	entries: RwLock<IndexSet<Value>>,
}

impl Dictionary {
	/// An empty, unordered dictionary over `value_type` entries.
	pub fn new(value_type: Type) -> Self {
		Self::with_ordered(value_type, false)
	}

	pub fn with_ordered(value_type: Type, ordered: bool) -> Self {
		debug_assert!(!matches!(value_type, Type::Undefined | Type::Enum(_)));
		Self {
			value_type,
			ordered,
			entries: RwLock::new(IndexSet::new()),
		}
	}

	/// Builds a dictionary from a stream of values, deduplicating while
	/// preserving first appearance order. Every value must match
	/// `value_type`.
	pub fn build(value_type: Type, ordered: bool, values: impl IntoIterator<Item = Value>) -> Result<Self> {
		let dictionary = Self::with_ordered(value_type, ordered);
		for value in values {
			dictionary.extend(value)?;
		}
		Ok(dictionary)
	}

	pub fn value_type(&self) -> Type {
		self.value_type
	}

	pub fn is_ordered(&self) -> bool {
		self.ordered
	}

	pub fn cardinality(&self) -> u64 {
		self.entries.read().len() as u64
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// The narrowest index width covering the current cardinality.
	pub fn width(&self) -> EnumWidth {
		EnumWidth::for_cardinality(self.cardinality()).unwrap_or(EnumWidth::Uint4)
	}

	pub fn contains(&self, value: &Value) -> bool {
		self.entries.read().contains(value)
	}

	/// The index of `value`, or `None` when the dictionary has no such
	/// entry.
	pub fn lookup(&self, value: &Value) -> Option<u32> {
		self.entries.read().get_index_of(value).map(|index| index as u32)
	}

	/// The entry at `index`, or `None` when the index is out of range.
	pub fn get(&self, index: u32) -> Option<Value> {
		self.entries.read().get_index(index as usize).cloned()
	}

	/// The entry at `index`, failing with `DICT_003` when out of range.
	pub fn value_at(&self, index: u32) -> Result<Value> {
		match self.get(index) {
			Some(value) => Ok(value),
			None => err!(dictionary_index_out_of_range(index, self.cardinality())),
		}
	}

	/// Returns the index of `value`, inserting it at the end when absent.
	/// Fails with `DICT_002` on a value type mismatch and `DICT_001` once
	/// the widest index space is exhausted.
	pub fn extend(&self, value: Value) -> Result<u32> {
		self.check_entry_type(&value)?;
		let mut entries = self.entries.write();
		if let Some(index) = entries.get_index_of(&value) {
			return Ok(index as u32);
		}
		if entries.len() as u64 >= EnumWidth::MAX_CARDINALITY {
			return err!(dictionary_capacity_exceeded(entries.len() as u64 + 1));
		}
		let (index, _) = entries.insert_full(value);
		Ok(index as u32)
	}

	/// Resolves a batch of values to indices under a single write lock,
	/// inserting absent ones. All or nothing: when any value fails the
	/// type or capacity check, the dictionary is left untouched.
	pub fn extend_all(&self, values: &[Value]) -> Result<Vec<u32>> {
		for value in values {
			self.check_entry_type(value)?;
		}
		let mut entries = self.entries.write();
		let mut incoming = IndexSet::new();
		for value in values {
			if !entries.contains(value) {
				incoming.insert(value.clone());
			}
		}
		let cardinality = entries.len() as u64 + incoming.len() as u64;
		if cardinality > EnumWidth::MAX_CARDINALITY {
			return err!(dictionary_capacity_exceeded(cardinality));
		}
		let mut indices = Vec::with_capacity(values.len());
		for value in values {
			let (index, _) = entries.insert_full(value.clone());
			indices.push(index as u32);
		}
		Ok(indices)
	}

	/// A snapshot of all entries in index order.
	pub fn values(&self) -> Vec<Value> {
		self.entries.read().iter().cloned().collect()
	}

	fn check_entry_type(&self, value: &Value) -> Result<()> {
		let actual = value.get_type();
		if actual != self.value_type {
			return err!(dictionary_value_type_mismatch(self.value_type, actual));
		}
		Ok(())
	}
}

impl Debug for Dictionary {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Dictionary")
			.field("value_type", &self.value_type)
			.field("ordered", &self.ordered)
			.field("cardinality", &self.cardinality())
			.finish()
	}
}

impl Clone for Dictionary {
	fn clone(&self) -> Self {
		Self {
			value_type: self.value_type,
			ordered: self.ordered,
			entries: RwLock::new(self.entries.read().clone()),
		}
	}
}

impl PartialEq for Dictionary {
	fn eq(&self, other: &Self) -> bool {
		if self.value_type != other.value_type || self.ordered != other.ordered {
			return false;
		}
		// snapshot each side in turn, the locks must not overlap
		let lhs = self.values();
		let rhs = other.values();
		lhs == rhs
	}
}

impl Serialize for Dictionary {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		#[derive(Serialize)]
		struct Helper<'a> {
			value_type: Type,
			ordered: bool,
			entries: &'a [Value],
		}
		let entries = self.values();
		Helper {
			value_type: self.value_type,
			ordered: self.ordered,
			entries: &entries,
		}
		.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Dictionary {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		struct Helper {
			value_type: Type,
			ordered: bool,
			entries: Vec<Value>,
		}
		let helper = Helper::deserialize(deserializer)?;
		Ok(Dictionary {
			value_type: helper.value_type,
			ordered: helper.ordered,
			entries: RwLock::new(helper.entries.into_iter().collect()),
		})
	}
}
