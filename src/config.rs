// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;

use crate::DebugFlags;
use lexer::LexerConfig;

/// Everything one `vlad` invocation needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: PathBuf,
    pub lexer: LexerConfig,
    pub debug: DebugFlags,
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            lexer: LexerConfig::default(),
            debug: DebugFlags::default(),
            verbose: false,
        }
    }

    pub fn with_lexer_config(mut self, lexer: LexerConfig) -> Self {
        self.lexer = lexer;
        self
    }

    pub fn with_debug(mut self, debug: DebugFlags) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
