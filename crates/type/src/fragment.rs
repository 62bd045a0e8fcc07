// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use serde::{Deserialize, Serialize};

/// A piece of source text a diagnostic points at. `Internal` fragments carry
/// text synthesized by the engine itself rather than taken from a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
	#[default]
	None,
	Internal {
		text: String,
	},
	Statement {
		text: String,
		line: u32,
		column: u32,
	},
}

impl Fragment {
	pub fn internal(text: impl Into<String>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	pub fn statement(text: impl Into<String>, line: u32, column: u32) -> Self {
		Fragment::Statement {
			text: text.into(),
			line,
			column,
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Internal {
				text,
			} => text,
			Fragment::Statement {
				text,
				..
			} => text,
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Fragment::None)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_internal() {
		let fragment = Fragment::internal("medium");
		assert_eq!(fragment.text(), "medium");
		assert!(!fragment.is_none());
	}

	#[test]
	fn test_statement() {
		let fragment = Fragment::statement("where size = 'xl'", 3, 7);
		assert_eq!(fragment.text(), "where size = 'xl'");
	}

	#[test]
	fn test_none_is_default() {
		let fragment = Fragment::default();
		assert!(fragment.is_none());
		assert_eq!(fragment.text(), "");
	}
}
