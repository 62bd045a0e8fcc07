// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

/// Wraps a [`crate::error::diagnostic::Diagnostic`] into a [`crate::Error`].
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($diagnostic)
	};
}

/// Shorthand for `Err(error!(...))`.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error::Error($diagnostic))
	};
}

/// Returns early with `Err(error!(...))`.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error::Error($diagnostic))
	};
}
