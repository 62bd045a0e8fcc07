// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

pub mod cast;
pub mod column;
pub mod dictionary;
pub mod internal;
mod render;

pub use render::DefaultRenderer;
use serde::{Deserialize, Serialize};

use crate::{Fragment, Type};

/// A structured description of a failure: a stable code, a human readable
/// message and optional context for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	/// Stable machine readable code, e.g. `DICT_001`.
	pub code: String,
	/// The statement that was being executed, if any.
	pub statement: Option<String>,
	pub message: String,
	/// The column the failure relates to, if any.
	pub column: Option<DiagnosticColumn>,
	/// Source fragment the failure points at.
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	/// The underlying diagnostic when this one wraps another failure.
	pub cause: Option<Box<Diagnostic>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticColumn {
	pub name: String,
	pub value_type: Type,
}

impl Diagnostic {
	pub fn code(&self) -> &str {
		&self.code
	}

	pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
		self.statement = Some(statement.into());
		self
	}

	pub fn with_column(mut self, name: impl Into<String>, value_type: Type) -> Self {
		self.column = Some(DiagnosticColumn {
			name: name.into(),
			value_type,
		});
		self
	}

	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

/// Conversion of domain specific error types into a [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}
