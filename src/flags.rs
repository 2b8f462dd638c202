// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebugFlags {
    pub tokens: bool,
    pub ast: bool,
}

impl DebugFlags {
    /// --debug=tokens
    /// --debug=tokens,ast
    /// --debug=all
    pub fn apply(&mut self, mode: &str) {
        for item in mode.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()) {
            match item {
                "tokens" => self.tokens = true,
                "ast" => self.ast = true,
                "all" => {
                    self.tokens = true;
                    self.ast = true;
                }
                other => tracing::warn!(mode = other, "ignoring unknown debug mode"),
            }
        }
    }

    pub fn parse(mode: &str) -> Self {
        let mut flags = DebugFlags::default();
        flags.apply(mode);
        flags
    }
}
