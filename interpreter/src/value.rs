// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
//! Runtime values.

use std::fmt;
use std::rc::Rc;

use parser::ast::{FunctionNode, Literal, VladType};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Result of statements and of `return;`.
    Void,
    Int(i64),
    Float(f64),
    /// Single byte; also the result type of comparisons and logic.
    Char(u8),
    Str(String),
    /// Copied on every read; writes go back through the environment.
    Array(Vec<Value>),
    Function(Rc<FunctionNode>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::Char(_))
    }

    /// Nonzero numbers are true; `None` for anything non-numeric.
    pub fn truthy(&self) -> Option<bool> {
        match self {
            Value::Int(v) => Some(*v != 0),
            Value::Float(v) => Some(*v != 0.0),
            Value::Char(v) => Some(*v != 0),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Char(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Char(v) => Some(f64::from(*v)),
            _ => None,
        }
    }

    pub fn bool(b: bool) -> Value {
        Value::Char(u8::from(b))
    }

    /// Zero value bound by `var x: T;`.
    pub fn default_for(vlad_type: VladType) -> Value {
        match vlad_type {
            VladType::Int => Value::Int(0),
            VladType::Float => Value::Float(0.0),
            VladType::Char => Value::Char(0),
            VladType::String => Value::Str(String::new()),
            VladType::Void => Value::Void,
        }
    }

    pub fn has_type(&self, vlad_type: VladType) -> bool {
        matches!(
            (self, vlad_type),
            (Value::Int(_), VladType::Int)
                | (Value::Float(_), VladType::Float)
                | (Value::Char(_), VladType::Char)
                | (Value::Str(_), VladType::String)
                | (Value::Void, VladType::Void)
        )
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Int(v) => Value::Int(*v),
            Literal::Float(v) => Value::Float(*v),
            Literal::Char(c) => Value::Char(*c),
            Literal::String(s) => Value::Str(s.clone()),
        }
    }
}

/// Debug-ish rendering used by the REPL echo and diagnostics.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "void"),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:.6}", v),
            Value::Char(c) => write!(f, "{}", c),
            Value::Str(s) => write!(f, "{}", s),
            Value::Array(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
            Value::Function(func) => write!(f, "<fun {}>", func.name),
        }
    }
}
