// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

mod width;

use serde::{Deserialize, Serialize};
pub use width::EnumWidth;

use crate::Value;

/// The logical type of a column or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// The absence of a type, carried by undefined values.
	Undefined,
	/// A boolean.
	Boolean,
	/// A 64-bit floating point number.
	Float8,
	/// A signed 64-bit integer.
	Int8,
	/// A UTF-8 encoded string.
	Utf8,
	/// A dictionary encoded value addressed by an index of the given
	/// width.
	Enum(EnumWidth),
}

impl Type {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Type::Undefined)
	}

	pub fn is_boolean(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Type::Float8)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_enum(&self) -> bool {
		matches!(self, Type::Enum(_))
	}

	pub fn enum_width(&self) -> Option<EnumWidth> {
		match self {
			Type::Enum(width) => Some(*width),
			_ => None,
		}
	}
}

impl From<&Value> for Type {
	fn from(value: &Value) -> Self {
		value.get_type()
	}
}

impl std::fmt::Display for Type {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("Undefined"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int8 => f.write_str("Int8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Enum(width) => write!(f, "Enum({})", width),
		}
	}
}
