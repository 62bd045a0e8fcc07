// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

//! Dictionary encoded enum columns.
//!
//! A [`Dictionary`] maps distinct values to dense `u32` indices in first
//! appearance order. An [`EnumContainer`] stores one index per row at the
//! smallest width that covers the dictionary, next to a validity bitmap.
//! [`cast`], [`compare`] and [`join`] operate on such columns without
//! materializing the underlying values.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod cast;
pub mod compare;
pub mod container;
pub mod data;
pub mod dictionary;
pub mod index;
pub mod join;

pub use container::{BoolContainer, EnumContainer, Utf8Container};
pub use data::ColumnData;
pub use dictionary::{Dictionary, DictionaryCatalog, DictionaryId};
pub use index::IndexData;
