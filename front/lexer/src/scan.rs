// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use crate::token::TokenType;
use crate::{Lexer, Token};
use error::{VladError, VladErrorKind};

impl<'a> Lexer<'a> {
    pub fn next_token(&mut self) -> Result<Token, VladError> {
        self.skip_trivia()?;

        if self.is_at_end() {
            return Ok(Token::new(TokenType::Eof, "", self.line));
        }

        let start = self.current;
        let c = self.advance();

        let token_type = match c {
            '+' => {
                if self.match_next('+') {
                    TokenType::Increment
                } else {
                    TokenType::Plus
                }
            }
            '-' => {
                if self.match_next('-') {
                    TokenType::Decrement
                } else if self.match_next('>') {
                    TokenType::Arrow
                } else if self.peek().is_ascii_digit() {
                    let first = self.advance();
                    return self.number(start, first, true);
                } else {
                    TokenType::Minus
                }
            }
            '*' => TokenType::Star,
            '/' => TokenType::Div,
            '=' => {
                if self.match_next('=') {
                    TokenType::EqualTwo
                } else {
                    TokenType::Equal
                }
            }
            '!' => {
                if self.match_next('=') {
                    TokenType::NotEqual
                } else {
                    TokenType::Not
                }
            }
            '<' => {
                if self.match_next('=') {
                    TokenType::LchevrEq
                } else {
                    TokenType::Lchevr
                }
            }
            '>' => {
                if self.match_next('=') {
                    TokenType::RchevrEq
                } else {
                    TokenType::Rchevr
                }
            }
            '&' => {
                if self.match_next('&') {
                    TokenType::LogicalAnd
                } else {
                    return Err(self.lone_operator_error('&', start));
                }
            }
            '|' => {
                if self.match_next('|') {
                    TokenType::LogicalOr
                } else {
                    return Err(self.lone_operator_error('|', start));
                }
            }
            '(' => TokenType::Lparen,
            ')' => TokenType::Rparen,
            '{' => TokenType::Lbrace,
            '}' => TokenType::Rbrace,
            '[' => TokenType::Lbrack,
            ']' => TokenType::Rbrack,
            ';' => TokenType::SemiColon,
            ':' => TokenType::Colon,
            ',' => TokenType::Comma,
            '.' => TokenType::Dot,
            '"' => TokenType::String(self.string()?),
            '\'' => TokenType::CharLiteral(self.char_literal()?),
            c if c.is_ascii_digit() => return self.number(start, c, false),
            c if c.is_ascii_alphabetic() || c == '_' => {
                let ident = self.identifier(start)?;
                return Ok(self.keyword_or_ident_token(ident));
            }
            _ => {
                return Err(self
                    .make_error(
                        VladErrorKind::UnexpectedChar(c),
                        format!("unrecognised character `{}` on line {}", c.escape_default(), self.line),
                        self.line,
                        self.column_at(start),
                    )
                    .with_code("E1001")
                    .with_label("not part of any token"));
            }
        };

        Ok(self.token_from(token_type, start))
    }

    fn lone_operator_error(&self, c: char, start: usize) -> VladError {
        self.make_error(
            VladErrorKind::UnexpectedChar(c),
            format!("invalid token `{}` on line {}", c, self.line),
            self.line,
            self.column_at(start),
        )
        .with_code("E1001")
        .with_help(format!("logical operators are written `{}{}`", c, c))
    }
}
