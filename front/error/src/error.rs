// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VladErrorKind {
    // Lexer errors
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),
    #[error("invalid char literal: {0}")]
    InvalidChar(String),
    #[error("invalid string literal: {0}")]
    InvalidString(String),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("{0} exceeds the configured limit")]
    LimitExceeded(String),

    // Parser errors
    #[error("unexpected token {0}")]
    UnexpectedToken(String),
    #[error("expected {0}")]
    ExpectedToken(String),
    #[error("invalid type `{0}`")]
    InvalidType(String),
    #[error("invalid assignment target")]
    InvalidAssignment,

    // Import errors
    #[error("import target `{0}` not found")]
    ImportNotFound(String),
    #[error("failed to read import `{0}`")]
    ImportReadFailed(String),

    // Runtime errors
    #[error("unbound symbol `{0}`")]
    UnboundSymbol(String),
    #[error("symbol `{0}` already bound")]
    AlreadyBound(String),
    #[error("mismatched types: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
    #[error("`{0}` is not a function")]
    NotCallable(String),
    #[error("function `{name}` takes {expected} argument(s), {found} supplied")]
    ArityMismatch { name: String, expected: usize, found: usize },
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("cannot allocate an array of {0} elements")]
    ArrayTooLarge(usize),
    #[error("division by zero")]
    DivisionByZero,
    #[error("`{0}` outside of a loop")]
    ControlFlowOutsideLoop(String),

    // I/O errors
    #[error("failed to read `{0}`")]
    FileReadError(String),
    #[error("failed to write program output: {0}")]
    OutputError(String),
}

/// Pipeline stage a diagnostic originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lex,
    Parse,
    Runtime,
    Io,
}

impl VladErrorKind {
    pub fn phase(&self) -> Phase {
        use VladErrorKind::*;
        match self {
            UnexpectedChar(_) | InvalidNumber(_) | InvalidChar(_) | InvalidString(_)
            | UnterminatedString | UnterminatedComment | LimitExceeded(_) => Phase::Lex,
            UnexpectedToken(_) | ExpectedToken(_) | InvalidType(_) | InvalidAssignment
            | ImportNotFound(_) | ImportReadFailed(_) => Phase::Parse,
            UnboundSymbol(_) | AlreadyBound(_) | TypeMismatch { .. } | NotCallable(_)
            | ArityMismatch { .. } | IndexOutOfBounds { .. } | ArrayTooLarge(_) | DivisionByZero
            | ControlFlowOutsideLoop(_) => Phase::Runtime,
            FileReadError(_) | OutputError(_) => Phase::Io,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VladError {
    pub kind: VladErrorKind,
    pub message: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub source_code: Option<String>,
    pub label: Option<String>,
    pub help: Option<String>,
    pub note: Option<String>,
    pub code: Option<String>,
}

impl VladError {
    pub fn new(kind: VladErrorKind, message: impl Into<String>, file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            file: file.into(),
            line,
            column,
            source_code: None,
            label: None,
            help: None,
            note: None,
            code: None,
        }
    }

    /// Runtime diagnostics start without a location; the evaluator attaches
    /// the statement line on the way out.
    pub fn runtime(kind: VladErrorKind) -> Self {
        let message = kind.to_string();
        Self::new(kind, message, "<runtime>", 0, 0)
    }

    /// Keep the whole file around so `display` can pick the offending line.
    pub fn with_source_code(mut self, source_code: impl Into<String>) -> Self {
        self.source_code = Some(source_code.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Attach the failing statement's file and line, unless an inner
    /// statement already did.
    pub fn at_statement(mut self, file: &str, line: usize) -> Self {
        if self.line == 0 {
            self.file = file.to_string();
            self.line = line;
        }
        self
    }

    pub fn phase(&self) -> Phase {
        self.kind.phase()
    }

    /// Create a type mismatch error with detailed information
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        let expected = expected.into();
        let found = found.into();
        Self::runtime(VladErrorKind::TypeMismatch { expected: expected.clone(), found: found.clone() })
            .with_label(format!("expected `{}`, found `{}`", expected, found))
    }

    pub fn unbound(name: &str) -> Self {
        Self::runtime(VladErrorKind::UnboundSymbol(name.to_string()))
            .with_help("make sure the symbol is declared before use")
    }

    fn source_line(&self) -> Option<String> {
        let code = self.source_code.as_ref()?;
        code.lines().nth(self.line.checked_sub(1)?).map(str::to_string)
    }

    /// Display error in rustc-style format on stderr.
    pub fn display(&self) {
        use colored::*;

        let head = match &self.code {
            Some(code) => format!("error[{}]", code).red().bold(),
            None => "error".red().bold(),
        };
        eprintln!("{}: {}", head, self.message.bold());

        if self.line > 0 {
            eprintln!("  {} {}:{}:{}", "-->".blue().bold(), self.file, self.line, self.column.max(1));
        } else {
            eprintln!("  {} {}", "-->".blue().bold(), self.file);
        }
        eprintln!("   {}", "|".blue().bold());

        if let Some(source_line) = self.source_line() {
            eprintln!("{:>3} {} {}", self.line.to_string().blue().bold(), "|".blue().bold(), source_line);

            let spaces = " ".repeat(self.column.saturating_sub(1));
            let arrow = "^".red().bold();
            if let Some(label) = &self.label {
                eprintln!("   {} {}{} {}", "|".blue().bold(), spaces, arrow, label.dimmed());
            } else {
                eprintln!("   {} {}{}", "|".blue().bold(), spaces, arrow);
            }
            eprintln!("   {}", "|".blue().bold());
        }

        if let Some(note) = &self.note {
            eprintln!("   {} {}: {}", "=".blue().bold(), "note".cyan().bold(), note);
        }

        if let Some(help) = &self.help {
            eprintln!("   {} {}: {}", "=".blue().bold(), "help".green().bold(), help);
        }
    }
}

impl fmt::Display for VladError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{}:{}: {}", self.file, self.line, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for VladError {}
