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

#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // Keywords
    Int,
    If,
    Import,
    Print,
    While,
    FloatType,
    For,
    Fun,
    StringType,
    Var,
    Void,
    Return,
    Break,
    CharType,
    Continue,
    Else,

    // Literals
    Identifier(String),
    IntLiteral(i64),
    Float(f64),
    CharLiteral(u8),
    String(String),

    // Operators
    Plus,
    Minus,
    Star,
    Div,
    Increment,
    Decrement,
    Arrow,
    Equal,
    EqualTwo,
    Not,
    NotEqual,
    Lchevr,
    LchevrEq,
    Rchevr,
    RchevrEq,
    LogicalAnd,
    LogicalOr,

    // Punctuation
    Lparen,
    Rparen,
    Lbrace,
    Rbrace,
    Lbrack,
    Rbrack,
    SemiColon,
    Colon,
    Comma,
    Dot,

    Eof,
}

pub(crate) fn keyword(ident: &str) -> Option<TokenType> {
    let token_type = match ident {
        "int" => TokenType::Int,
        "if" => TokenType::If,
        "import" => TokenType::Import,
        "print" => TokenType::Print,
        "while" => TokenType::While,
        "float" => TokenType::FloatType,
        "for" => TokenType::For,
        "fun" => TokenType::Fun,
        "string" => TokenType::StringType,
        "var" => TokenType::Var,
        "void" => TokenType::Void,
        "return" => TokenType::Return,
        "break" => TokenType::Break,
        "char" => TokenType::CharType,
        "continue" => TokenType::Continue,
        "else" => TokenType::Else,
        _ => return None,
    };
    Some(token_type)
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Identifier(name) => write!(f, "identifier `{}`", name),
            TokenType::IntLiteral(v) => write!(f, "integer `{}`", v),
            TokenType::Float(v) => write!(f, "float `{}`", v),
            TokenType::CharLiteral(c) => write!(f, "char literal `{}`", (*c as char).escape_default()),
            TokenType::String(s) => write!(f, "string \"{}\"", s.escape_default()),
            TokenType::Eof => write!(f, "end of input"),
            other => write!(f, "`{}`", other.symbol()),
        }
    }
}

impl TokenType {
    /// Source spelling of fixed tokens; literals and identifiers return "".
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenType::Int => "int",
            TokenType::If => "if",
            TokenType::Import => "import",
            TokenType::Print => "print",
            TokenType::While => "while",
            TokenType::FloatType => "float",
            TokenType::For => "for",
            TokenType::Fun => "fun",
            TokenType::StringType => "string",
            TokenType::Var => "var",
            TokenType::Void => "void",
            TokenType::Return => "return",
            TokenType::Break => "break",
            TokenType::CharType => "char",
            TokenType::Continue => "continue",
            TokenType::Else => "else",
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Star => "*",
            TokenType::Div => "/",
            TokenType::Increment => "++",
            TokenType::Decrement => "--",
            TokenType::Arrow => "->",
            TokenType::Equal => "=",
            TokenType::EqualTwo => "==",
            TokenType::Not => "!",
            TokenType::NotEqual => "!=",
            TokenType::Lchevr => "<",
            TokenType::LchevrEq => "<=",
            TokenType::Rchevr => ">",
            TokenType::RchevrEq => ">=",
            TokenType::LogicalAnd => "&&",
            TokenType::LogicalOr => "||",
            TokenType::Lparen => "(",
            TokenType::Rparen => ")",
            TokenType::Lbrace => "{",
            TokenType::Rbrace => "}",
            TokenType::Lbrack => "[",
            TokenType::Rbrack => "]",
            TokenType::SemiColon => ";",
            TokenType::Colon => ":",
            TokenType::Comma => ",",
            TokenType::Dot => ".",
            TokenType::Identifier(_)
            | TokenType::IntLiteral(_)
            | TokenType::Float(_)
            | TokenType::CharLiteral(_)
            | TokenType::String(_)
            | TokenType::Eof => "",
        }
    }
}
