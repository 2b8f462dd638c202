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
use crate::ast::StatementKind;
use error::VladError;
use lexer::TokenType;

impl<'a> Parser<'a> {
    pub(crate) fn parse_print(&mut self) -> Result<StatementKind, VladError> {
        self.expect(TokenType::Print, "")?;
        self.expect(TokenType::Lparen, "after `print`")?;

        let mut args = vec![self.parse_expression()?];
        while self.match_token(&TokenType::Comma) {
            args.push(self.parse_expression()?);
        }

        self.expect(TokenType::Rparen, "to close `print`")?;
        self.expect(TokenType::SemiColon, "after `print(...)`")?;
        Ok(StatementKind::Print(args))
    }
}
