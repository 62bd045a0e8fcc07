// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use std::{
	fmt::{self, Debug},
	ops::{Deref, Index},
	sync::Arc,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A copy-on-write vector. Clones share the underlying allocation; the first
/// mutation through a shared handle copies the data.
pub struct CowVec<T> {
	inner: Arc<Vec<T>>,
}

impl<T> CowVec<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self {
			inner: Arc::new(data),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: Arc::new(Vec::with_capacity(capacity)),
		}
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.inner.capacity()
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.inner.get(index)
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.inner.iter()
	}

	/// Recover the inner Vec when this handle is the sole owner.
	pub fn try_into_vec(self) -> Result<Vec<T>, Self> {
		Arc::try_unwrap(self.inner).map_err(|inner| Self {
			inner,
		})
	}
}

impl<T: Clone> CowVec<T> {
	pub fn push(&mut self, value: T) {
		Arc::make_mut(&mut self.inner).push(value);
	}

	pub fn set(&mut self, index: usize, value: T) {
		Arc::make_mut(&mut self.inner)[index] = value;
	}

	pub fn extend_from_slice(&mut self, values: &[T]) {
		Arc::make_mut(&mut self.inner).extend_from_slice(values);
	}

	pub fn clear(&mut self) {
		Arc::make_mut(&mut self.inner).clear();
	}

	/// The first `num` elements as a new vector.
	pub fn take(&self, num: usize) -> Self {
		Self::new(self.inner[..num.min(self.len())].to_vec())
	}
}

impl<T> Clone for CowVec<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.inner.as_slice()
	}
}

impl<T> Index<usize> for CowVec<T> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		&self.inner[index]
	}
}

impl<T: Debug> Debug for CowVec<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.inner.iter()).finish()
	}
}

impl<T: PartialEq> PartialEq for CowVec<T> {
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T: Eq> Eq for CowVec<T> {}

impl<T> Default for CowVec<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T> FromIterator<T> for CowVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<'a, T> IntoIterator for &'a CowVec<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.iter()
	}
}

impl<T: Serialize> Serialize for CowVec<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.inner.serialize(serializer)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CowVec<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(Self::new(Vec::deserialize(deserializer)?))
	}
}
