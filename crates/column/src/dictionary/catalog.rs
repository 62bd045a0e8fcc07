// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use std::{
	fmt::{self, Display, Formatter},
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::dictionary::Dictionary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DictionaryId(pub u64);

impl Display for DictionaryId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// Registry of live dictionaries. Columns referencing the same id share
/// one dictionary instance, which is what makes their index spaces
/// directly comparable.
pub struct DictionaryCatalog {
	dictionaries: DashMap<DictionaryId, Arc<Dictionary>>,
	next_id: AtomicU64,
}

impl DictionaryCatalog {
	pub fn new() -> Self {
		Self {
			dictionaries: DashMap::new(),
			next_id: AtomicU64::new(1),
		}
	}

	#[instrument(name = "catalog::dictionary::create", level = "trace", skip(self, dictionary))]
	pub fn create(&self, dictionary: Dictionary) -> DictionaryId {
		let id = DictionaryId(self.next_id.fetch_add(1, Ordering::Relaxed));
		self.dictionaries.insert(id, Arc::new(dictionary));
		id
	}

	#[instrument(name = "catalog::dictionary::get", level = "trace", skip(self))]
	pub fn get(&self, id: DictionaryId) -> Option<Arc<Dictionary>> {
		self.dictionaries.get(&id).map(|entry| Arc::clone(entry.value()))
	}

	#[instrument(name = "catalog::dictionary::remove", level = "trace", skip(self))]
	pub fn remove(&self, id: DictionaryId) -> Option<Arc<Dictionary>> {
		self.dictionaries.remove(&id).map(|(_, dictionary)| dictionary)
	}

	pub fn list(&self) -> Vec<DictionaryId> {
		let mut ids: Vec<DictionaryId> = self.dictionaries.iter().map(|entry| *entry.key()).collect();
		ids.sort_unstable();
		ids
	}

	pub fn len(&self) -> usize {
		self.dictionaries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dictionaries.is_empty()
	}
}

impl Default for DictionaryCatalog {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use cardinal_type::{Type, Value};

	use super::*;

	#[test]
	fn test_create_and_get() {
		let catalog = DictionaryCatalog::new();
		let id = catalog.create(Dictionary::new(Type::Utf8));
		let dictionary = catalog.get(id).unwrap();
		assert_eq!(dictionary.value_type(), Type::Utf8);
	}

	#[test]
	fn test_get_returns_the_shared_instance() {
		let catalog = DictionaryCatalog::new();
		let id = catalog.create(Dictionary::new(Type::Utf8));
		let first = catalog.get(id).unwrap();
		let second = catalog.get(id).unwrap();
		assert!(Arc::ptr_eq(&first, &second));

		first.extend(Value::utf8("m")).unwrap();
		assert_eq!(second.lookup(&Value::utf8("m")), Some(0));
	}

	#[test]
	fn test_ids_are_unique_and_listed_in_order() {
		let catalog = DictionaryCatalog::new();
		let a = catalog.create(Dictionary::new(Type::Utf8));
		let b = catalog.create(Dictionary::new(Type::Int8));
		assert_ne!(a, b);
		assert_eq!(catalog.list(), vec![a, b]);
	}

	#[test]
	fn test_remove() {
		let catalog = DictionaryCatalog::new();
		let id = catalog.create(Dictionary::new(Type::Utf8));
		assert!(catalog.remove(id).is_some());
		assert!(catalog.get(id).is_none());
		assert!(catalog.is_empty());
	}
}
