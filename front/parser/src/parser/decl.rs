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
use crate::ast::{Declarator, DeclaratorKind};
use error::{VladError, VladErrorKind};
use lexer::TokenType;

impl<'a> Parser<'a> {
    /// Comma-separated declarators following `var` (also the `for` init).
    pub(crate) fn parse_declarators(&mut self) -> Result<Vec<Declarator>, VladError> {
        let mut declarators = vec![self.parse_declarator()?];
        while self.match_token(&TokenType::Comma) {
            declarators.push(self.parse_declarator()?);
        }
        Ok(declarators)
    }

    fn parse_declarator(&mut self) -> Result<Declarator, VladError> {
        let name = self.expect_identifier("in variable declaration")?;

        let size = if self.match_token(&TokenType::Lbrack) {
            let size = self.parse_expression()?;
            self.expect(TokenType::Rbrack, "after array size")?;
            Some(size)
        } else {
            None
        };

        let var_type = if self.match_token(&TokenType::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let kind = match size {
            Some(size) => {
                if var_type.is_none() {
                    return Err(self
                        .error_here(
                            VladErrorKind::InvalidType(name.clone()),
                            format!("array `{}` needs an element type", name),
                        )
                        .with_code("E2003")
                        .with_help(format!("write `var {}[..]: int;`", name)));
                }

                let init = if self.check(&TokenType::Lbrace) {
                    Some(self.parse_brace_list()?)
                } else if self.match_token(&TokenType::Equal) {
                    if !self.check(&TokenType::Lbrace) {
                        return Err(self
                            .error_here(
                                VladErrorKind::ExpectedToken("`{`".to_string()),
                                format!("expected `{{` to start the initializer of array `{}`", name),
                            )
                            .with_code("E2002"));
                    }
                    Some(self.parse_brace_list()?)
                } else {
                    None
                };

                DeclaratorKind::Array { size, init }
            }
            None if self.match_token(&TokenType::Equal) => DeclaratorKind::Initialized(self.parse_expression()?),
            None if var_type.is_some() => DeclaratorKind::Default,
            None => {
                return Err(self
                    .error_here(
                        VladErrorKind::InvalidType(name.clone()),
                        format!("`{}` needs a type annotation or an initializer", name),
                    )
                    .with_code("E2003")
                    .with_help(format!("write `var {}: int;` or `var {} = 0;`", name, name)));
            }
        };

        Ok(Declarator { name, var_type, kind })
    }
}
