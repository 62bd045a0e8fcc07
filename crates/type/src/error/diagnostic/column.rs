// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use crate::{EnumWidth, Fragment, Type, error::diagnostic::Diagnostic};

/// COLUMN_001: an index buffer was asked to shrink its width.
pub fn width_promotion_failed(from: EnumWidth, to: EnumWidth) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_001".to_string(),
		statement: None,
		message: format!("cannot change index width from {} to {}: narrowing would truncate indices", from, to),
		column: None,
		fragment: Fragment::None,
		label: Some("index width can only grow".to_string()),
		help: None,
		notes: Vec::new(),
		cause: None,
	}
}

/// COLUMN_002: a row holds no value where one was required.
pub fn undefined_value_access(index: usize) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_002".to_string(),
		statement: None,
		message: format!("row {} holds no value", index),
		column: None,
		fragment: Fragment::None,
		label: Some("undefined where a value was required".to_string()),
		help: Some("check definedness with is_defined before extracting the value".to_string()),
		notes: Vec::new(),
		cause: None,
	}
}

/// COLUMN_003: a value of the wrong type was pushed into a column.
pub fn column_value_type_mismatch(expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_003".to_string(),
		statement: None,
		message: format!("column holds {} values, cannot append {}", expected, actual),
		column: None,
		fragment: Fragment::None,
		label: Some(format!("expected {}", expected)),
		help: None,
		notes: Vec::new(),
		cause: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_width_promotion_failed() {
		let diagnostic = width_promotion_failed(EnumWidth::Uint2, EnumWidth::Uint1);
		assert_eq!(diagnostic.code, "COLUMN_001");
		assert!(diagnostic.message.contains("Uint2"));
		assert!(diagnostic.message.contains("Uint1"));
	}

	#[test]
	fn test_undefined_value_access() {
		let diagnostic = undefined_value_access(12);
		assert_eq!(diagnostic.code, "COLUMN_002");
		assert!(diagnostic.message.contains("row 12"));
	}

	#[test]
	fn test_column_value_type_mismatch() {
		let diagnostic = column_value_type_mismatch(Type::Boolean, Type::Utf8);
		assert_eq!(diagnostic.code, "COLUMN_003");
		assert!(diagnostic.message.contains("Boolean"));
	}
}
