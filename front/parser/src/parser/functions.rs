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
use crate::ast::{FunctionNode, ParameterNode, StatementKind, VladType};
use error::VladError;
use lexer::TokenType;

impl<'a> Parser<'a> {
    /// `fun name(a: int, b) [-> type] { ... }`
    pub(crate) fn parse_function(&mut self) -> Result<FunctionNode, VladError> {
        self.expect(TokenType::Fun, "")?;
        let name = self.expect_identifier("after `fun`")?;
        self.expect(TokenType::Lparen, "after function name")?;

        let mut parameters = Vec::new();
        if !self.check(&TokenType::Rparen) {
            loop {
                let param_name = self.expect_identifier("in parameter list")?;
                let param_type = if self.match_token(&TokenType::Colon) {
                    Some(self.parse_type()?)
                } else {
                    None
                };
                parameters.push(ParameterNode { name: param_name, param_type });

                if !self.match_token(&TokenType::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenType::Rparen, "to close the parameter list")?;

        let return_type = if self.match_token(&TokenType::Arrow) {
            self.parse_type()?
        } else {
            VladType::Void
        };

        let body = self.parse_block()?;

        Ok(FunctionNode { name, parameters, return_type, body })
    }

    pub(crate) fn parse_return(&mut self) -> Result<StatementKind, VladError> {
        self.expect(TokenType::Return, "")?;
        let value = if self.check(&TokenType::SemiColon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenType::SemiColon, "after `return`")?;
        Ok(StatementKind::Return(value))
    }
}
