// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use cardinal_type::{
	Error, Fragment, Type,
	error::diagnostic::{Diagnostic, IntoDiagnostic},
};

/// Validation failures of host supplied categorical data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
	#[error("codes and validity lengths diverge: {codes} codes, {validity} validity bits")]
	LengthMismatch { codes: usize, validity: usize },
	#[error("category {index} duplicates an earlier category")]
	DuplicateCategory { index: usize },
	#[error("categories mix {first} and {second} values")]
	MixedCategoryTypes { first: Type, second: Type },
	#[error("category {index} is undefined")]
	UndefinedCategory { index: usize },
	#[error("code {code} at row {row} exceeds {cardinality} categories")]
	CodeOutOfRange { code: u32, row: usize, cardinality: usize },
}

impl BridgeError {
	pub fn code(&self) -> &'static str {
		match self {
			BridgeError::LengthMismatch { .. } => "BRIDGE_001",
			BridgeError::DuplicateCategory { .. } => "BRIDGE_002",
			BridgeError::MixedCategoryTypes { .. } => "BRIDGE_003",
			BridgeError::UndefinedCategory { .. } => "BRIDGE_004",
			BridgeError::CodeOutOfRange { .. } => "BRIDGE_005",
		}
	}
}

impl IntoDiagnostic for BridgeError {
	fn into_diagnostic(self) -> Diagnostic {
		Diagnostic {
			code: self.code().to_string(),
			statement: None,
			message: self.to_string(),
			column: None,
			fragment: Fragment::None,
			label: Some("rejected at the host boundary".to_string()),
			help: Some("the host handed over malformed categorical data".to_string()),
			notes: Vec::new(),
			cause: None,
		}
	}
}

impl From<BridgeError> for Error {
	fn from(error: BridgeError) -> Self {
		Error(error.into_diagnostic())
	}
}
