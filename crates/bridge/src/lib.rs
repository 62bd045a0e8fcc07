// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

//! Interchange of dictionary encoded columns with host runtimes.
//!
//! Hosts hand categorical data over as a [`CategoricalArray`]: the
//! distinct categories once, plus one code per row and a validity bitmap.
//! [`ingest`] turns such an array into an engine column, [`materialize`]
//! turns a column back into an array, and [`ChunkCursor`] streams a column
//! out in fixed size chunks.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod array;
pub mod convert;
pub mod cursor;
pub mod error;

pub use array::CategoricalArray;
pub use convert::{ingest, materialize};
pub use cursor::{ChunkCursor, DEFAULT_CHUNK_ROWS};
pub use error::BridgeError;
