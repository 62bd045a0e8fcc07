// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

use cardinal_type::Value;
use tracing::instrument;

use crate::{container::Utf8Container, data::ColumnData};

/// Renders a column to its text layout. Total: every defined value has a
/// rendering and undefined rows stay undefined. Enum columns decode
/// through their dictionary.
#[instrument(name = "cast::to_text", level = "debug", skip(data), fields(value_type = %data.get_type(), rows = data.len()))]
pub fn to_text(data: &ColumnData) -> ColumnData {
	if let ColumnData::Utf8(_) = data {
		return data.clone();
	}
	let mut container = Utf8Container::with_capacity(data.len());
	for value in data.iter() {
		match value {
			Value::Undefined => container.push_undefined(),
			value => container.push(value.to_string()),
		}
	}
	ColumnData::Utf8(container)
}
