// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

pub mod diagnostic;
mod r#macro;

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

use crate::error::diagnostic::{DefaultRenderer, Diagnostic};

/// The error type of every fallible operation. Wraps a [`Diagnostic`] so
/// callers can match on stable codes and render messages for humans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&DefaultRenderer::render_string(&self.0))
	}
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
