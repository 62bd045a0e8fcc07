// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

mod r#enum;
mod text;

use cardinal_type::{Fragment, Result, Type, err, error::diagnostic::cast::unsupported_cast};
pub use r#enum::to_enum;
pub use text::to_text;

use crate::data::ColumnData;

/// Casts a column to `target`. Rendering to [`Type::Utf8`] is total;
/// everything else must be an identity cast. Encoding into an enum needs
/// a dictionary and goes through [`to_enum`] instead.
pub fn cast(data: &ColumnData, target: Type) -> Result<ColumnData> {
	match (data, target) {
		(data, Type::Utf8) => Ok(to_text(data)),
		(ColumnData::Bool(_), Type::Boolean) => Ok(data.clone()),
		(ColumnData::Enum(container), Type::Enum(width)) if container.width() == width => Ok(data.clone()),
		(data, target) => err!(unsupported_cast(Fragment::None, data.get_type(), target)),
	}
}

#[cfg(test)]
mod tests {
	use cardinal_type::EnumWidth;

	use super::*;

	#[test]
	fn test_cast_to_utf8_is_total() {
		let column = ColumnData::bool([true, false]);
		let cast = cast(&column, Type::Utf8).unwrap();
		assert_eq!(cast.get_type(), Type::Utf8);
		assert_eq!(cast.as_string(0), "true");
	}

	#[test]
	fn test_identity_cast() {
		let column = ColumnData::bool([true]);
		let cast = cast(&column, Type::Boolean).unwrap();
		assert_eq!(cast, column);
	}

	#[test]
	fn test_unsupported_cast() {
		let column = ColumnData::bool([true]);
		let err = cast(&column, Type::Enum(EnumWidth::Uint1)).unwrap_err();
		assert_eq!(err.code(), "CAST_001");
	}
}
