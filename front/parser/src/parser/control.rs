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
use crate::ast::{ElseBranch, ForInit, ForNode, IfNode, StatementKind};
use error::VladError;
use lexer::TokenType;

impl<'a> Parser<'a> {
    pub(crate) fn parse_if(&mut self) -> Result<IfNode, VladError> {
        self.expect(TokenType::If, "")?;
        self.expect(TokenType::Lparen, "after `if`")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::Rparen, "after `if` condition")?;
        let then_block = self.parse_block()?;

        let else_branch = if self.match_token(&TokenType::Else) {
            if self.check(&TokenType::If) {
                Some(ElseBranch::If(Box::new(self.parse_if()?)))
            } else {
                Some(ElseBranch::Block(self.parse_block()?))
            }
        } else {
            None
        };

        Ok(IfNode { condition, then_block, else_branch })
    }

    pub(crate) fn parse_while(&mut self) -> Result<StatementKind, VladError> {
        self.expect(TokenType::While, "")?;
        self.expect(TokenType::Lparen, "after `while`")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::Rparen, "after `while` condition")?;
        let body = self.parse_block()?;

        Ok(StatementKind::While { condition, body })
    }

    pub(crate) fn parse_for(&mut self) -> Result<ForNode, VladError> {
        self.expect(TokenType::For, "")?;
        self.expect(TokenType::Lparen, "after `for`")?;

        let init = if self.match_token(&TokenType::Var) {
            ForInit::Var(self.parse_declarators()?)
        } else {
            ForInit::Expression(self.parse_expression()?)
        };
        self.expect(TokenType::SemiColon, "after `for` initializer")?;

        let condition = self.parse_expression()?;
        self.expect(TokenType::SemiColon, "after `for` condition")?;

        let post = self.parse_expression()?;
        self.expect(TokenType::Rparen, "to close the `for` header")?;

        let body = self.parse_block()?;

        Ok(ForNode { init, condition, post, body })
    }
}
