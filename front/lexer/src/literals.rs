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

/// Where an escape sequence appears; only changes the diagnostic.
#[derive(Clone, Copy)]
enum Quoted {
    Str,
    Char,
}

impl<'a> Lexer<'a> {
    /// Body of a string literal; the opening quote is already consumed.
    pub(crate) fn string(&mut self) -> Result<String, VladError> {
        let mut string_literal = String::new();
        let start_line = self.line;
        let start_col = self.current_column().saturating_sub(1).max(1);

        while !self.is_at_end() && self.peek() != '"' {
            let c = self.advance();
            match c {
                '\\' => string_literal.push(self.escape(Quoted::Str)? as char),
                '\n' => {
                    self.newline();
                    string_literal.push(c);
                }
                _ => string_literal.push(c),
            }

            if string_literal.len() > self.config.max_string_len {
                return Err(self
                    .make_error(
                        VladErrorKind::LimitExceeded("string literal".to_string()),
                        format!(
                            "string literal longer than {} bytes",
                            self.config.max_string_len
                        ),
                        start_line,
                        start_col,
                    )
                    .with_code("E1007")
                    .with_help("split the text or raise `--max-string-len`"));
            }
        }

        if self.is_at_end() {
            return Err(self
                .make_error(
                    VladErrorKind::UnterminatedString,
                    "unterminated string literal; missing closing quote",
                    start_line,
                    start_col,
                )
                .with_code("E1003")
                .with_label("string literal starts here")
                .with_help("add `\"` to close the string"));
        }

        self.advance(); // closing quote
        Ok(string_literal)
    }

    /// Exactly one byte between single quotes; the opening quote is consumed.
    pub(crate) fn char_literal(&mut self) -> Result<u8, VladError> {
        let start_line = self.line;
        let start_col = self.current_column().saturating_sub(1).max(1);

        let value = match self.peek() {
            '\\' => {
                self.advance();
                self.escape(Quoted::Char)?
            }
            '\'' | '\0' | '\n' => {
                return Err(self
                    .make_error(
                        VladErrorKind::InvalidChar("empty char literal".to_string()),
                        "empty char literal; expected a character before closing quote",
                        start_line,
                        start_col,
                    )
                    .with_code("E1005")
                    .with_help("write a single character like `'a'` or an escape like `'\\n'`"));
            }
            c if c.is_ascii() => {
                self.advance();
                c as u8
            }
            c => {
                return Err(self
                    .make_error(
                        VladErrorKind::InvalidChar(format!("non-ASCII character `{}`", c)),
                        format!("char literal `{}` does not fit in a single byte", c),
                        start_line,
                        start_col,
                    )
                    .with_code("E1005")
                    .with_help("use a string literal for non-ASCII text"));
            }
        };

        if !self.match_next('\'') {
            return Err(self
                .make_error(
                    VladErrorKind::InvalidChar("unterminated char literal".to_string()),
                    "expected `'` at end of char literal",
                    start_line,
                    start_col,
                )
                .with_code("E1005")
                .with_label("char literal must contain exactly one character")
                .with_help("close with `'` and ensure exactly one character value"));
        }
        Ok(value)
    }

    fn escape(&mut self, quoted: Quoted) -> Result<u8, VladError> {
        let escaped = self.advance();
        let value = match escaped {
            'a' => 0x07,
            'b' => 0x08,
            'f' => 0x0c,
            'n' => b'\n',
            'r' => b'\r',
            't' => b'\t',
            'v' => 0x0b,
            '\\' => b'\\',
            '"' => b'"',
            '\'' => b'\'',
            _ => {
                let shown = if escaped == '\0' { "end of input".to_string() } else { format!("\\{}", escaped) };
                let (kind, code, what) = match quoted {
                    Quoted::Str => (VladErrorKind::InvalidString(format!("unknown escape sequence {}", shown)), "E1004", "string"),
                    Quoted::Char => (VladErrorKind::InvalidChar(format!("unknown escape sequence {}", shown)), "E1005", "char"),
                };
                return Err(self
                    .make_error_here(kind, format!("unknown escape sequence `{}` in {} literal", shown, what))
                    .with_code(code)
                    .with_label("unsupported escape sequence")
                    .with_help("supported escapes: \\a \\b \\f \\n \\r \\t \\v \\\\ \\\" \\'"));
            }
        };
        Ok(value)
    }

    /// Digits accumulate into one integer; a `.` switches to counting
    /// fractional digits and the division by 10^n happens once at the end.
    pub(crate) fn number(&mut self, start: usize, first: char, negative: bool) -> Result<Token, VladError> {
        let start_col = self.column_at(start);
        let mut value: i64 = first.to_digit(10).map(i64::from).unwrap_or(0);
        let mut fraction_digits: Option<i32> = None;

        loop {
            let c = self.peek();
            if let Some(digit) = c.to_digit(10) {
                self.advance();
                match (value.checked_mul(10).and_then(|v| v.checked_add(i64::from(digit))), fraction_digits.as_mut()) {
                    (Some(v), Some(n)) => {
                        value = v;
                        *n += 1;
                    }
                    (Some(v), None) => value = v,
                    // Fraction digits past 64 bits are below f64 precision.
                    (None, Some(_)) => {}
                    (None, None) => {
                        return Err(self.number_error(start, start_col, "literal does not fit in 64 bits"));
                    }
                }
            } else if c == '.' {
                if fraction_digits.is_some() {
                    self.advance();
                    return Err(self.number_error(start, start_col, "second decimal point in number"));
                }
                self.advance();
                fraction_digits = Some(0);
            } else {
                break;
            }
        }

        if negative {
            value = -value;
        }

        let token_type = match fraction_digits {
            None => TokenType::IntLiteral(value),
            Some(n) => TokenType::Float(value as f64 / 10f64.powi(n)),
        };
        Ok(self.token_from(token_type, start))
    }

    fn number_error(&self, start: usize, column: usize, reason: &str) -> VladError {
        let text = &self.source[start..self.current];
        self.make_error(
            VladErrorKind::InvalidNumber(text.to_string()),
            format!("invalid number literal `{}`: {}", text, reason),
            self.line,
            column,
        )
        .with_code("E1006")
    }
}
