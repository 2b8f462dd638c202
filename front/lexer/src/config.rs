// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

/// Buffer limits the lexer enforces on a single literal or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    pub max_string_len: usize,
    pub max_identifier_len: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            max_string_len: 2047,
            max_identifier_len: 254,
        }
    }
}

impl LexerConfig {
    pub fn max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }

    pub fn max_identifier_len(mut self, len: usize) -> Self {
        self.max_identifier_len = len;
        self
    }
}
