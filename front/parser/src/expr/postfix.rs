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
use crate::parser::Parser;
use error::{VladError, VladErrorKind};
use lexer::TokenType;

impl<'a> Parser<'a> {
    /// One token of lookahead after an identifier picks call, index,
    /// post-increment/decrement or a plain reference.
    pub(crate) fn parse_identifier_tail(&mut self, name: String) -> Result<Expression, VladError> {
        match self.peek_type() {
            TokenType::Lparen => {
                self.advance();
                let mut args = Vec::new();
                if !self.check(&TokenType::Rparen) {
                    loop {
                        args.push(self.parse_expression()?);
                        if !self.match_token(&TokenType::Comma) {
                            break;
                        }
                    }
                }
                self.expect(TokenType::Rparen, "to close the argument list")?;
                Ok(Expression::FunctionCall { name, args })
            }
            TokenType::Lbrack => {
                self.advance();
                let index = self.parse_expression()?;
                self.expect(TokenType::Rbrack, "after array index")?;
                Ok(Expression::IndexAccess { name, index: Box::new(index) })
            }
            TokenType::Increment => {
                self.advance();
                Ok(Expression::PostIncrement(name))
            }
            TokenType::Decrement => {
                self.advance();
                Ok(Expression::PostDecrement(name))
            }
            TokenType::Dot => Err(self
                .error_here(
                    VladErrorKind::UnexpectedToken("`.`".to_string()),
                    format!("member access on `{}` is not supported", name),
                )
                .with_code("E2001")
                .with_note("Vlad has no structs")),
            _ => Ok(Expression::Variable(name)),
        }
    }
}
