// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use crate::{Fragment, error::diagnostic::Diagnostic};

/// INTERNAL_ERROR: an invariant the engine relies on did not hold.
pub fn internal(message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		statement: None,
		message: message.into(),
		column: None,
		fragment: Fragment::None,
		label: Some("this is a bug".to_string()),
		help: Some("please report this at https://github.com/cardinaldb/cardinal/issues".to_string()),
		notes: Vec::new(),
		cause: None,
	}
}

/// Like [`internal`] but records where in the source the invariant broke.
/// The macros below capture the location automatically.
pub fn internal_with_context(
	message: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	function: &str,
	module: &str,
) -> Diagnostic {
	let mut diagnostic = internal(message);
	diagnostic.notes.push(format!("location: {}:{}:{}", file, line, column));
	diagnostic.notes.push(format!("function: {}", function));
	diagnostic.notes.push(format!("module: {}", module));
	diagnostic
}

/// Creates an internal [`crate::Error`], capturing file, line, column,
/// function and module of the call site. Accepts `format!` style arguments.
#[macro_export]
macro_rules! internal_error {
	($($arg:tt)*) => {{
		fn f() {}
		fn type_name_of<T>(_: T) -> &'static str {
			std::any::type_name::<T>()
		}
		let name = type_name_of(f);
		let function = name.strip_suffix("::f").unwrap_or(name);
		$crate::error::Error($crate::error::diagnostic::internal::internal_with_context(
			format!($($arg)*),
			file!(),
			line!(),
			column!(),
			function,
			module_path!(),
		))
	}};
}

/// Shorthand for `Err(internal_error!(...))`.
#[macro_export]
macro_rules! internal_err {
	($($arg:tt)*) => {
		Err($crate::internal_error!($($arg)*))
	};
}

/// Returns early with `Err(internal_error!(...))`.
#[macro_export]
macro_rules! return_internal_error {
	($($arg:tt)*) => {
		return $crate::internal_err!($($arg)*)
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_internal_code_and_help() {
		let diagnostic = internal("row count drifted");
		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert_eq!(diagnostic.message, "row count drifted");
		assert!(diagnostic.help.is_some());
	}

	#[test]
	fn test_internal_with_context_records_location() {
		let diagnostic = internal_with_context("boom", "src/lib.rs", 42, 7, "crate::tests::f", "crate::tests");
		assert!(diagnostic.notes.iter().any(|n| n == "location: src/lib.rs:42:7"));
		assert!(diagnostic.notes.iter().any(|n| n == "function: crate::tests::f"));
		assert!(diagnostic.notes.iter().any(|n| n == "module: crate::tests"));
	}

	#[test]
	fn test_internal_error_macro_captures_call_site() {
		let error = internal_error!("bad index {}", 3);
		assert_eq!(error.0.code, "INTERNAL_ERROR");
		assert_eq!(error.0.message, "bad index 3");
		assert!(error.0.notes.iter().any(|n| n.contains("internal.rs")));
		assert!(error.0.notes.iter().any(|n| n.contains("test_internal_error_macro_captures_call_site")));
	}

	#[test]
	fn test_internal_err_macro_is_a_result() {
		let result: crate::Result<()> = internal_err!("unreachable state");
		let error = result.unwrap_err();
		assert_eq!(error.0.code, "INTERNAL_ERROR");
	}
}
