// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

mod ordered_f64;
pub mod r#type;

use std::fmt::{Display, Formatter};

pub use ordered_f64::{OrderedF64, OrderedFloatError};
use serde::{Deserialize, Serialize};
pub use r#type::{EnumWidth, Type};

/// A single scalar value. Dictionary entries and column cells both carry
/// this representation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
	/// The absence of a value.
	Undefined,
	/// A boolean value.
	Boolean(bool),
	/// A 64-bit floating point value with a total order.
	Float8(OrderedF64),
	/// A signed 64-bit integer value.
	Int8(i64),
	/// A UTF-8 encoded string value.
	Utf8(String),
}

impl Value {
	pub fn boolean(v: bool) -> Self {
		Value::Boolean(v)
	}

	/// Wraps a float, mapping unordered payloads (NaN) to `Undefined`.
	pub fn float8(v: f64) -> Self {
		OrderedF64::try_from(v).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn int8(v: i64) -> Self {
		Value::Int8(v)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float8(_) => Type::Float8,
			Value::Int8(_) => Type::Int8,
			Value::Utf8(_) => Type::Utf8,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Utf8(v) => f.write_str(v),
		}
	}
}
