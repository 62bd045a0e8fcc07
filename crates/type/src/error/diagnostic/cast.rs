// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use crate::{Fragment, Type, error::diagnostic::Diagnostic};

/// CAST_001: no conversion exists between the two column types.
pub fn unsupported_cast(fragment: Fragment, from: Type, to: Type) -> Diagnostic {
	Diagnostic {
		code: "CAST_001".to_string(),
		statement: None,
		message: format!("cannot cast {} to {}", from, to),
		column: None,
		fragment,
		label: Some(format!("unsupported cast from {} to {}", from, to)),
		help: Some("columns can be cast between their value type and an enum encoding of it, or rendered to Utf8".to_string()),
		notes: Vec::new(),
		cause: None,
	}
}
