// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

mod config;
mod core;
mod cursor;
mod ident;
mod literals;
mod scan;
mod token;
mod trivia;

pub use config::LexerConfig;
pub use core::{Lexer, Token};
pub use token::TokenType;
