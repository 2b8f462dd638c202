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

impl<'a> Lexer<'a> {
    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    pub(crate) fn advance(&mut self) -> char {
        match self.source[self.current..].chars().next() {
            Some(c) => {
                self.current += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    pub(crate) fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    pub(crate) fn peek_next(&self) -> char {
        // `current` is a byte offset, so look ahead through the char iterator.
        let mut it = self.source[self.current..].chars();
        it.next();
        it.next().unwrap_or('\0')
    }

    pub(crate) fn match_next(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    pub(crate) fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }
}
