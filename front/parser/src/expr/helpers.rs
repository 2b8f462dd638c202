// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use crate::ast::Expression;

/// Targets `=` may write through: a variable or one array element.
pub fn is_assignable(expr: &Expression) -> bool {
    matches!(expr, Expression::Variable(_) | Expression::IndexAccess { .. })
}
