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
use crate::LexerConfig;
use error::{VladError, VladErrorKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, line: usize) -> Self {
        Token { token_type, lexeme: lexeme.into(), line }
    }
}

#[derive(Debug)]
pub struct Lexer<'a> {
    pub source: &'a str,
    pub file: String,
    pub config: LexerConfig,
    pub current: usize,
    pub line: usize,
    pub line_start: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::new_with_file(source, "<input>")
    }

    pub fn new_with_file(source: &'a str, file: impl Into<String>) -> Lexer<'a> {
        Lexer {
            source,
            file: file.into(),
            config: LexerConfig::default(),
            current: 0,
            line: 1,
            line_start: 0,
        }
    }

    pub fn with_config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    /// Scan the whole buffer. The last token is always `Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, VladError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.token_type == TokenType::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    pub(crate) fn current_column(&self) -> usize {
        self.column_at(self.current)
    }

    pub(crate) fn column_at(&self, byte_index: usize) -> usize {
        let line_start = self.line_start.min(self.source.len());
        let end = byte_index.min(self.source.len());
        if end < line_start {
            return 1;
        }
        self.source[line_start..end].chars().count() + 1
    }

    pub(crate) fn make_error(
        &self,
        kind: VladErrorKind,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> VladError {
        VladError::new(kind, message, self.file.clone(), line.max(1), column.max(1))
            .with_source_code(self.source.to_string())
    }

    pub(crate) fn make_error_here(&self, kind: VladErrorKind, message: impl Into<String>) -> VladError {
        self.make_error(kind, message, self.line, self.current_column())
    }

    pub(crate) fn token_from(&self, token_type: TokenType, start: usize) -> Token {
        Token::new(token_type, &self.source[start..self.current], self.line)
    }
}
