// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use crate::Value;

/// Text written by `print` for one value, or `None` when the value has
/// no printed form (arrays, functions, void).
pub fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Int(v) => Some(v.to_string()),
        Value::Float(v) if v.is_nan() => Some("nan".to_string()),
        Value::Float(v) => Some(format!("{:.6}", v)),
        Value::Char(c) => Some(c.to_string()),
        Value::Str(s) => Some(s.clone()),
        Value::Void | Value::Array(_) | Value::Function(_) => None,
    }
}
