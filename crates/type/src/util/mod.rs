// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

pub mod bitvec;
pub mod cowvec;

pub use bitvec::BitVec;
pub use cowvec::CowVec;
