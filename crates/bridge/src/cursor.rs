// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use cardinal_column::EnumContainer;
use tracing::instrument;

use crate::{array::CategoricalArray, convert::materialize};

/// Rows per chunk when the host does not ask for a specific size.
pub const DEFAULT_CHUNK_ROWS: usize = 1024;

/// Streams a column out to the host in fixed size categorical chunks.
/// Every chunk carries the full category set, so codes stay comparable
/// across chunks. An exhausted cursor keeps yielding zero row chunks, it
/// never fails.
pub struct ChunkCursor<'a> {
	column: &'a EnumContainer,
	position: usize,
	chunk_rows: usize,
}

impl<'a> ChunkCursor<'a> {
	pub fn new(column: &'a EnumContainer) -> Self {
		Self::with_chunk_rows(column, DEFAULT_CHUNK_ROWS)
	}

	pub fn with_chunk_rows(column: &'a EnumContainer, chunk_rows: usize) -> Self {
		debug_assert!(chunk_rows > 0);
		Self {
			column,
			position: 0,
			chunk_rows: chunk_rows.max(1),
		}
	}

	/// Rows already handed out.
	pub fn position(&self) -> usize {
		self.position
	}

	pub fn remaining(&self) -> usize {
		self.column.len() - self.position
	}

	pub fn is_exhausted(&self) -> bool {
		self.position >= self.column.len()
	}

	/// The next chunk of at most `chunk_rows` rows. Past the end this
	/// yields an empty chunk with the full category set, as often as it
	/// is called.
	#[instrument(name = "bridge::cursor::fetch", level = "trace", skip(self), fields(position = self.position))]
	pub fn fetch(&mut self) -> CategoricalArray {
		let length = self.chunk_rows.min(self.remaining());
		let chunk = self.column.slice(self.position, length);
		self.position += length;
		materialize(&chunk)
	}
}
