// SPDX-License-Identifier: MIT
// Copyright (c) 2025 CardinalDB

mod bool;
mod r#enum;
mod utf8;

pub use self::bool::BoolContainer;
pub use r#enum::EnumContainer;
pub use utf8::Utf8Container;
