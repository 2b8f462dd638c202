// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use std::io::Write;

use crate::runner::locate;
use error::VladError;
use interpreter::{Interpreter, Value};
use lexer::LexerConfig;
use parser::ImportState;

/// One interactive session: a single global frame and import set that
/// persist across lines.
pub struct Session<W: Write> {
    interpreter: Interpreter<W>,
    imports: ImportState,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, lexer_config: LexerConfig) -> Self {
        Session {
            interpreter: Interpreter::new(out),
            imports: ImportState::new(lexer_config),
        }
    }

    /// Evaluate one line. Returns the value of a trailing expression
    /// statement when it is not void.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<Value>, VladError> {
        let program = parser::parse_source_with(line, "<repl>", &mut self.imports)?;
        self.interpreter
            .run_interactive(&program)
            .map_err(|e| locate(e, "<repl>", line))
    }

    pub fn interpreter(&self) -> &Interpreter<W> {
        &self.interpreter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error::VladErrorKind;

    #[test]
    fn bindings_survive_between_lines() {
        let mut session = Session::new(Vec::new(), LexerConfig::default());
        assert_eq!(session.eval_line("var x = 20;").unwrap(), None);
        assert_eq!(session.eval_line("fun inc(n) -> int { return n + 1; }").unwrap(), None);
        assert_eq!(session.eval_line("inc(x) * 2;").unwrap(), Some(Value::Int(42)));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let mut session = Session::new(Vec::new(), LexerConfig::default());
        let err = session.eval_line("print(missing);").unwrap_err();
        assert_eq!(err.kind, VladErrorKind::UnboundSymbol("missing".into()));
        assert_eq!(err.file, "<repl>");

        assert!(session.eval_line("var = ;").is_err());
        session.eval_line("print(1);").unwrap();
        assert_eq!(session.interpreter().output().as_slice(), b"1\n");
    }
}
