// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
mod control;
mod decl;
mod functions;
mod io;
mod parse;
mod types;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::ImportState;
use error::{VladError, VladErrorKind};
use lexer::{Token, TokenType};

/// Recursive-descent parser over one file's tokens. Imports are parsed by
/// a nested `Parser` sharing the same `ImportState`.
pub struct Parser<'a> {
    pub(crate) tokens: Vec<Token>,
    pub(crate) pos: usize,
    /// Shared with every statement parsed from this file.
    pub(crate) file: Rc<str>,
    pub(crate) source: Option<&'a str>,
    pub(crate) base_dir: Option<PathBuf>,
    pub(crate) imports: &'a mut ImportState,
}

impl<'a> Parser<'a> {
    pub fn new(mut tokens: Vec<Token>, file: impl Into<String>, imports: &'a mut ImportState) -> Self {
        if !matches!(tokens.last(), Some(t) if t.token_type == TokenType::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenType::Eof, "", line));
        }
        Parser {
            tokens,
            pos: 0,
            file: Rc::from(file.into()),
            source: None,
            base_dir: None,
            imports,
        }
    }

    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_base_dir(mut self, dir: Option<&Path>) -> Self {
        self.base_dir = dir.map(Path::to_path_buf);
        self
    }

    pub(crate) fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    pub(crate) fn peek_type(&self) -> &TokenType {
        &self.peek().token_type
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, token_type: &TokenType) -> bool {
        self.peek_type() == token_type
    }

    pub(crate) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, token_type: TokenType, context: &str) -> Result<Token, VladError> {
        if self.check(&token_type) {
            return Ok(self.advance());
        }
        let wanted = format!("`{}`", token_type.symbol());
        let message = if context.is_empty() {
            format!("expected {}, found {}", wanted, self.peek_type())
        } else {
            format!("expected {} {}, found {}", wanted, context, self.peek_type())
        };
        Err(self
            .error_here(VladErrorKind::ExpectedToken(wanted), message)
            .with_code("E2002"))
    }

    pub(crate) fn expect_identifier(&mut self, context: &str) -> Result<String, VladError> {
        if let TokenType::Identifier(name) = self.peek_type() {
            let name = name.clone();
            self.advance();
            return Ok(name);
        }
        Err(self
            .error_here(
                VladErrorKind::ExpectedToken("identifier".to_string()),
                format!("expected identifier {}, found {}", context, self.peek_type()),
            )
            .with_code("E2002"))
    }

    pub(crate) fn error_here(&self, kind: VladErrorKind, message: impl Into<String>) -> VladError {
        let line = self.peek().line;
        let err = VladError::new(kind, message, self.file.to_string(), line, 0);
        match self.source {
            Some(source) => err.with_source_code(source),
            None => err,
        }
    }

    pub(crate) fn unexpected(&self, context: &str) -> VladError {
        let found = self.peek_type().to_string();
        self.error_here(
            VladErrorKind::UnexpectedToken(found.clone()),
            format!("unexpected {} {}", found, context),
        )
        .with_code("E2001")
    }
}
