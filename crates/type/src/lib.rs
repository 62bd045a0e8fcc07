// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod fragment;
pub mod util;
pub mod value;

pub use error::{Error, Result, diagnostic::Diagnostic};
pub use fragment::Fragment;
pub use util::{bitvec::BitVec, cowvec::CowVec};
pub use value::{EnumWidth, OrderedF64, Type, Value};
