// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use serde::{Deserialize, Serialize};

use crate::{error, error::diagnostic::dictionary::dictionary_capacity_exceeded};

/// The storage width of an enum column's index buffer. Columns always use
/// the smallest width whose index space covers the dictionary cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnumWidth {
	/// 8-bit indices, up to 256 dictionary entries.
	Uint1,
	/// 16-bit indices, up to 65 536 dictionary entries.
	Uint2,
	/// 32-bit indices, up to 2^32 dictionary entries.
	Uint4,
}

impl EnumWidth {
	/// The largest cardinality any enum dictionary can reach.
	pub const MAX_CARDINALITY: u64 = 1 << 32;

	/// The minimal width able to address `cardinality` distinct entries.
	/// Fails once the cardinality exceeds the 32-bit index space.
	pub fn for_cardinality(cardinality: u64) -> crate::Result<Self> {
		if cardinality <= u8::MAX as u64 + 1 {
			Ok(EnumWidth::Uint1)
		} else if cardinality <= u16::MAX as u64 + 1 {
			Ok(EnumWidth::Uint2)
		} else if cardinality <= Self::MAX_CARDINALITY {
			Ok(EnumWidth::Uint4)
		} else {
			Err(error!(dictionary_capacity_exceeded(cardinality)))
		}
	}

	/// The minimal width able to hold `index`. Total: every u32 fits Uint4.
	pub fn for_index(index: u32) -> Self {
		if index <= u8::MAX as u32 {
			EnumWidth::Uint1
		} else if index <= u16::MAX as u32 {
			EnumWidth::Uint2
		} else {
			EnumWidth::Uint4
		}
	}

	pub fn max_cardinality(&self) -> u64 {
		match self {
			EnumWidth::Uint1 => 1 << 8,
			EnumWidth::Uint2 => 1 << 16,
			EnumWidth::Uint4 => 1 << 32,
		}
	}

	pub fn max_index(&self) -> u32 {
		match self {
			EnumWidth::Uint1 => u8::MAX as u32,
			EnumWidth::Uint2 => u16::MAX as u32,
			EnumWidth::Uint4 => u32::MAX,
		}
	}

	pub fn fits_cardinality(&self, cardinality: u64) -> bool {
		cardinality <= self.max_cardinality()
	}

	/// Size of one index in bytes.
	pub fn size(&self) -> usize {
		match self {
			EnumWidth::Uint1 => 1,
			EnumWidth::Uint2 => 2,
			EnumWidth::Uint4 => 4,
		}
	}
}

impl std::fmt::Display for EnumWidth {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			EnumWidth::Uint1 => f.write_str("Uint1"),
			EnumWidth::Uint2 => f.write_str("Uint2"),
			EnumWidth::Uint4 => f.write_str("Uint4"),
		}
	}
}
