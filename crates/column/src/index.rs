// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use cardinal_type::{BitVec, CowVec, EnumWidth, Result, err, error::diagnostic::column::width_promotion_failed};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A buffer of dictionary indices stored at one of three physical widths.
/// The width only ever grows; existing indices keep their meaning across
/// a promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IndexData {
	Uint1(CowVec<u8>),
	Uint2(CowVec<u16>),
	Uint4(CowVec<u32>),
}

impl IndexData {
	pub fn new(width: EnumWidth) -> Self {
		Self::with_capacity(width, 0)
	}

	pub fn with_capacity(width: EnumWidth, capacity: usize) -> Self {
		match width {
			EnumWidth::Uint1 => IndexData::Uint1(CowVec::with_capacity(capacity)),
			EnumWidth::Uint2 => IndexData::Uint2(CowVec::with_capacity(capacity)),
			EnumWidth::Uint4 => IndexData::Uint4(CowVec::with_capacity(capacity)),
		}
	}

	pub fn width(&self) -> EnumWidth {
		match self {
			IndexData::Uint1(_) => EnumWidth::Uint1,
			IndexData::Uint2(_) => EnumWidth::Uint2,
			IndexData::Uint4(_) => EnumWidth::Uint4,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			IndexData::Uint1(values) => values.len(),
			IndexData::Uint2(values) => values.len(),
			IndexData::Uint4(values) => values.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get(&self, index: usize) -> Option<u32> {
		match self {
			IndexData::Uint1(values) => values.get(index).map(|v| *v as u32),
			IndexData::Uint2(values) => values.get(index).map(|v| *v as u32),
			IndexData::Uint4(values) => values.get(index).copied(),
		}
	}

	/// Appends an index. The caller guarantees it fits the current width,
	/// see [`IndexData::ensure_fits`].
	pub fn push(&mut self, value: u32) {
		debug_assert!(value <= self.width().max_index());
		match self {
			IndexData::Uint1(values) => values.push(value as u8),
			IndexData::Uint2(values) => values.push(value as u16),
			IndexData::Uint4(values) => values.push(value),
		}
	}

	/// Overwrites the index at `index`. The caller guarantees the value
	/// fits the current width and the position exists.
	pub fn set(&mut self, index: usize, value: u32) {
		debug_assert!(value <= self.width().max_index());
		match self {
			IndexData::Uint1(values) => values.set(index, value as u8),
			IndexData::Uint2(values) => values.set(index, value as u16),
			IndexData::Uint4(values) => values.set(index, value),
		}
	}

	/// Grows the width until `index` is representable. Rebuilds the buffer
	/// at the wider layout and swaps it in; a no-op when it already fits.
	pub fn ensure_fits(&mut self, index: u32) {
		let required = EnumWidth::for_index(index);
		if required > self.width() {
			*self = self.rebuilt(required);
		}
	}

	/// Changes the width explicitly. Only widening is allowed, narrowing
	/// would truncate stored indices.
	pub fn promote(&mut self, to: EnumWidth) -> Result<()> {
		if to < self.width() {
			return err!(width_promotion_failed(self.width(), to));
		}
		if to > self.width() {
			*self = self.rebuilt(to);
		}
		Ok(())
	}

	fn rebuilt(&self, to: EnumWidth) -> IndexData {
		debug!(from = %self.width(), to = %to, rows = self.len(), "Promoting index buffer to a wider layout");
		let mut data = IndexData::with_capacity(to, self.len());
		for value in self.iter() {
			data.push(value);
		}
		data
	}

	pub fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
		match self {
			IndexData::Uint1(values) => Box::new(values.iter().map(|v| *v as u32)),
			IndexData::Uint2(values) => Box::new(values.iter().map(|v| *v as u32)),
			IndexData::Uint4(values) => Box::new(values.iter().copied()),
		}
	}

	pub fn slice(&self, offset: usize, length: usize) -> IndexData {
		match self {
			IndexData::Uint1(values) => IndexData::Uint1(values.as_slice()[offset..offset + length].iter().copied().collect()),
			IndexData::Uint2(values) => IndexData::Uint2(values.as_slice()[offset..offset + length].iter().copied().collect()),
			IndexData::Uint4(values) => IndexData::Uint4(values.as_slice()[offset..offset + length].iter().copied().collect()),
		}
	}

	pub fn filter(&self, mask: &BitVec) -> IndexData {
		let mut data = IndexData::with_capacity(self.width(), mask.count_ones());
		for (position, value) in self.iter().enumerate() {
			if mask.get(position) {
				data.push(value);
			}
		}
		data
	}

	/// Appends every index of `other`, widening self first when `other`
	/// is stored at a wider layout.
	pub fn extend(&mut self, other: &IndexData) {
		if other.width() > self.width() {
			*self = self.rebuilt(other.width());
		}
		for value in other.iter() {
			self.push(value);
		}
	}
}

impl Default for IndexData {
	fn default() -> Self {
		IndexData::new(EnumWidth::Uint1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled(width: EnumWidth, values: &[u32]) -> IndexData {
		let mut data = IndexData::with_capacity(width, values.len());
		for &value in values {
			data.push(value);
		}
		data
	}

	#[test]
	fn test_push_and_get() {
		let data = filled(EnumWidth::Uint1, &[0, 3, 255]);
		assert_eq!(data.len(), 3);
		assert_eq!(data.get(1), Some(3));
		assert_eq!(data.get(2), Some(255));
		assert_eq!(data.get(3), None);
	}

	#[test]
	fn test_ensure_fits_widens() {
		let mut data = filled(EnumWidth::Uint1, &[7, 255]);
		data.ensure_fits(256);
		assert_eq!(data.width(), EnumWidth::Uint2);
		data.push(256);
		assert_eq!(data.iter().collect::<Vec<_>>(), vec![7, 255, 256]);
	}

	#[test]
	fn test_ensure_fits_is_noop_when_it_fits() {
		let mut data = filled(EnumWidth::Uint2, &[300]);
		data.ensure_fits(10);
		assert_eq!(data.width(), EnumWidth::Uint2);
	}

	#[test]
	fn test_promote_widens_and_keeps_indices() {
		let mut data = filled(EnumWidth::Uint1, &[1, 2, 3]);
		data.promote(EnumWidth::Uint4).unwrap();
		assert_eq!(data.width(), EnumWidth::Uint4);
		assert_eq!(data.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
	}

	#[test]
	fn test_promote_rejects_narrowing() {
		let mut data = filled(EnumWidth::Uint2, &[300]);
		let err = data.promote(EnumWidth::Uint1).unwrap_err();
		assert_eq!(err.code(), "COLUMN_001");
		assert_eq!(data.width(), EnumWidth::Uint2);
	}

	#[test]
	fn test_slice() {
		let data = filled(EnumWidth::Uint2, &[10, 20, 30, 40]);
		let slice = data.slice(1, 2);
		assert_eq!(slice.iter().collect::<Vec<_>>(), vec![20, 30]);
		assert_eq!(slice.width(), EnumWidth::Uint2);
	}

	#[test]
	fn test_filter() {
		let data = filled(EnumWidth::Uint1, &[10, 20, 30]);
		let mask = BitVec::from_slice(&[true, false, true]);
		let filtered = data.filter(&mask);
		assert_eq!(filtered.iter().collect::<Vec<_>>(), vec![10, 30]);
	}

	#[test]
	fn test_extend_widens_to_the_wider_side() {
		let mut data = filled(EnumWidth::Uint1, &[1]);
		let other = filled(EnumWidth::Uint2, &[300]);
		data.extend(&other);
		assert_eq!(data.width(), EnumWidth::Uint2);
		assert_eq!(data.iter().collect::<Vec<_>>(), vec![1, 300]);
	}

	#[test]
	fn test_serde_round_trip() {
		let data = filled(EnumWidth::Uint2, &[5, 300]);
		let json = serde_json::to_string(&data).unwrap();
		let back: IndexData = serde_json::from_str(&json).unwrap();
		assert_eq!(data, back);
	}
}
