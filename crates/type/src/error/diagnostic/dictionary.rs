// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use crate::{Fragment, Type, error::diagnostic::Diagnostic};

/// DICT_001: the dictionary grew past the widest addressable index space.
pub fn dictionary_capacity_exceeded(cardinality: u64) -> Diagnostic {
	Diagnostic {
		code: "DICT_001".to_string(),
		statement: None,
		message: format!("dictionary capacity exceeded: {} entries cannot be addressed by any index width", cardinality),
		column: None,
		fragment: Fragment::None,
		label: Some("too many distinct values".to_string()),
		help: Some("the widest index is 32 bit, which limits a dictionary to 4294967296 entries".to_string()),
		notes: Vec::new(),
		cause: None,
	}
}

/// DICT_002: an operand's value type does not match the dictionary's.
pub fn dictionary_value_type_mismatch(expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "DICT_002".to_string(),
		statement: None,
		message: format!("value type mismatch: dictionary holds {} values, got {}", expected, actual),
		column: None,
		fragment: Fragment::None,
		label: Some(format!("expected {}", expected)),
		help: Some("cast the operand to the dictionary's value type first".to_string()),
		notes: Vec::new(),
		cause: None,
	}
}

/// DICT_003: an index does not address any dictionary entry.
pub fn dictionary_index_out_of_range(index: u32, cardinality: u64) -> Diagnostic {
	Diagnostic {
		code: "DICT_003".to_string(),
		statement: None,
		message: format!("dictionary index {} out of range, dictionary holds {} entries", index, cardinality),
		column: None,
		fragment: Fragment::None,
		label: Some("no entry at this index".to_string()),
		help: None,
		notes: Vec::new(),
		cause: None,
	}
}
