// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
//! Tree-walking evaluator for Vlad programs.

mod env;
mod eval;
mod flow;
mod ops;
mod print;
mod value;

pub use env::Environment;
pub use eval::Interpreter;
pub use flow::Flow;
pub use print::format_value;
pub use value::Value;
