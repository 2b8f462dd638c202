// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use super::Parser;
use crate::ast::VladType;
use error::{VladError, VladErrorKind};
use lexer::TokenType;

impl<'a> Parser<'a> {
    pub(crate) fn parse_type(&mut self) -> Result<VladType, VladError> {
        let vlad_type = match self.peek_type() {
            TokenType::Int => VladType::Int,
            TokenType::FloatType => VladType::Float,
            TokenType::CharType => VladType::Char,
            TokenType::StringType => VladType::String,
            TokenType::Void => VladType::Void,
            other => {
                let found = other.to_string();
                return Err(self
                    .error_here(VladErrorKind::InvalidType(found.clone()), format!("expected a type, found {}", found))
                    .with_code("E2003")
                    .with_help("types are `int`, `float`, `char`, `string` and `void`"));
            }
        };
        self.advance();
        Ok(vlad_type)
    }
}
