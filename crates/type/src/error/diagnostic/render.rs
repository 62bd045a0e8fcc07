// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use crate::{Fragment, error::diagnostic::Diagnostic};

/// Renders diagnostics in a compact, rustc inspired plain text layout.
pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut out = format!("error[{}]: {}", diagnostic.code, diagnostic.message);
		if let Fragment::Statement {
			text,
			line,
			column,
		} = &diagnostic.fragment
		{
			out.push_str(&format!("\n  --> {}:{} `{}`", line, column, text));
		}
		if let Some(column) = &diagnostic.column {
			out.push_str(&format!("\n  = column: {} ({})", column.name, column.value_type));
		}
		if let Some(label) = &diagnostic.label {
			out.push_str(&format!("\n  = {}", label));
		}
		if let Some(help) = &diagnostic.help {
			out.push_str(&format!("\n  = help: {}", help));
		}
		for note in &diagnostic.notes {
			out.push_str(&format!("\n  = note: {}", note));
		}
		if let Some(cause) = &diagnostic.cause {
			out.push_str("\ncaused by:\n");
			out.push_str(&Self::render_string(cause));
		}
		out
	}
}
