// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use crate::Lexer;
use error::{VladError, VladErrorKind};

impl<'a> Lexer<'a> {
    pub(crate) fn skip_trivia(&mut self) -> Result<(), VladError> {
        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                break;
            }

            if self.peek() == '/' && self.peek_next() == '/' {
                self.skip_comment();
                continue;
            }

            if self.peek() == '/' && self.peek_next() == '*' {
                self.skip_multiline_comment()?;
                continue;
            }

            break;
        }

        Ok(())
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.newline();
                }
                _ => break,
            }
        }
    }

    pub(crate) fn skip_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// Block comments do not nest: the first `*/` closes the comment.
    pub(crate) fn skip_multiline_comment(&mut self) -> Result<(), VladError> {
        let start_line = self.line;
        let start_col = self.current_column();
        self.advance(); // '/'
        self.advance(); // '*'

        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return Ok(());
            }

            if self.advance() == '\n' {
                self.newline();
            }
        }

        Err(self
            .make_error(
                VladErrorKind::UnterminatedComment,
                "unterminated block comment; expected closing `*/`",
                start_line,
                start_col,
            )
            .with_code("E1002")
            .with_label("block comment starts here and never closes")
            .with_help("add `*/` to close the block comment"))
    }
}
