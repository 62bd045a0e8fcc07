// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

const WORD_BITS: usize = 64;

/// A growable bit vector packed into 64-bit words. Containers use it as the
/// validity mask (true = defined) and as plain boolean column storage.
///
/// Invariant: bits at positions >= `len` are always zero, so derived equality
/// and hashing over the words are exact.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitVec {
	words: Vec<u64>,
	len: usize,
}

impl BitVec {
	pub fn new() -> Self {
		Self {
			words: Vec::new(),
			len: 0,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			words: Vec::with_capacity(capacity.div_ceil(WORD_BITS)),
			len: 0,
		}
	}

	/// A bit vector of `len` copies of `value`.
	pub fn repeat(len: usize, value: bool) -> Self {
		let word_count = len.div_ceil(WORD_BITS);
		let mut words = vec![if value { u64::MAX } else { 0 }; word_count];
		if value && len % WORD_BITS != 0 {
			// keep the trailing bits of the last word zeroed
			if let Some(last) = words.last_mut() {
				*last &= (1u64 << (len % WORD_BITS)) - 1;
			}
		}
		Self {
			words,
			len,
		}
	}

	pub fn from_slice(bits: &[bool]) -> Self {
		let mut result = Self::with_capacity(bits.len());
		for &bit in bits {
			result.push(bit);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.words.capacity() * WORD_BITS
	}

	pub fn push(&mut self, value: bool) {
		let (word, bit) = (self.len / WORD_BITS, self.len % WORD_BITS);
		if word == self.words.len() {
			self.words.push(0);
		}
		if value {
			self.words[word] |= 1u64 << bit;
		}
		self.len += 1;
	}

	/// Returns the bit at `index`, or false when `index` is out of range.
	pub fn get(&self, index: usize) -> bool {
		if index >= self.len {
			return false;
		}
		self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 == 1
	}

	pub fn set(&mut self, index: usize, value: bool) {
		assert!(index < self.len, "bitvec index {} out of range for length {}", index, self.len);
		let (word, bit) = (index / WORD_BITS, index % WORD_BITS);
		if value {
			self.words[word] |= 1u64 << bit;
		} else {
			self.words[word] &= !(1u64 << bit);
		}
	}

	pub fn count_ones(&self) -> usize {
		self.words.iter().map(|w| w.count_ones() as usize).sum()
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len).map(move |i| self.get(i))
	}

	pub fn extend(&mut self, other: &BitVec) {
		for bit in other.iter() {
			self.push(bit);
		}
	}

	pub fn slice(&self, start: usize, end: usize) -> Self {
		let end = end.min(self.len);
		let mut result = Self::with_capacity(end.saturating_sub(start));
		for i in start..end {
			result.push(self.get(i));
		}
		result
	}

	pub fn clear(&mut self) {
		self.words.clear();
		self.len = 0;
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BitVec[")?;
		for bit in self.iter() {
			write!(f, "{}", if bit { '1' } else { '0' })?;
		}
		write!(f, "]")
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let mut result = Self::new();
		for bit in iter {
			result.push(bit);
		}
		result
	}
}
