// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use crate::token::{keyword, TokenType};
use crate::{Lexer, Token};
use error::{VladError, VladErrorKind};

impl<'a> Lexer<'a> {
    /// `[A-Za-z_][A-Za-z0-9_]*`; the first character is already consumed.
    pub(crate) fn identifier(&mut self, start: usize) -> Result<String, VladError> {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let ident = &self.source[start..self.current];
        if ident.len() > self.config.max_identifier_len {
            return Err(self
                .make_error(
                    VladErrorKind::LimitExceeded("identifier".to_string()),
                    format!(
                        "identifier longer than {} characters",
                        self.config.max_identifier_len
                    ),
                    self.line,
                    self.column_at(start),
                )
                .with_code("E1007")
                .with_help("use a shorter name or raise `--max-ident-len`"));
        }

        Ok(ident.to_string())
    }

    pub(crate) fn keyword_or_ident_token(&self, ident: String) -> Token {
        match keyword(&ident) {
            Some(token_type) => Token::new(token_type, ident, self.line),
            None => Token::new(TokenType::Identifier(ident.clone()), ident, self.line),
        }
    }
}
