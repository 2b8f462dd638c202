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

use super::Interpreter;
use crate::{ops, Environment, Value};
use error::{VladError, VladErrorKind};
use parser::ast::Expression;

impl<W: Write> Interpreter<W> {
    pub(crate) fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> Result<Value, VladError> {
        match expr {
            Expression::Literal(literal) => Ok(Value::from(literal)),
            Expression::Variable(name) => env.search(name).ok_or_else(|| VladError::unbound(name)),
            Expression::BinaryExpression { left, operator, right } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                ops::binary(*operator, &left, &right)
            }
            Expression::Assignment { target, value } => self.eval_assignment(target, value, env),
            Expression::Not(inner) => {
                let value = self.eval_expression(inner, env)?;
                ops::not(&value)
            }
            Expression::IndexAccess { name, index } => {
                let index = self.eval_index(index, env)?;
                let array = lookup_array(name, env)?;
                let slot = slot(array.len(), index)?;
                Ok(array[slot].clone())
            }
            Expression::FunctionCall { name, args } => self.call_function(name, args, env),
            Expression::PostIncrement(name) => step(name, 1, env),
            Expression::PostDecrement(name) => step(name, -1, env),
            Expression::ListLiteral(items) => items
                .iter()
                .map(|item| self.eval_expression(item, env))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }

    fn eval_assignment(&mut self, target: &Expression, value: &Expression, env: &Environment) -> Result<Value, VladError> {
        match target {
            Expression::Variable(name) => {
                if env.search(name).is_none() {
                    return Err(VladError::unbound(name));
                }
                let value = self.eval_expression(value, env)?;
                env.assign(name, value.clone())?;
                Ok(value)
            }
            Expression::IndexAccess { name, index } => {
                // Arrays live in the environment by value: modify a copy
                // and assign it back.
                let index = self.eval_index(index, env)?;
                let mut array = lookup_array(name, env)?;
                let slot = slot(array.len(), index)?;
                let value = self.eval_expression(value, env)?;
                array[slot] = value.clone();
                env.assign(name, Value::Array(array))?;
                Ok(value)
            }
            _ => Err(VladError::runtime(VladErrorKind::InvalidAssignment)),
        }
    }

    fn eval_index(&mut self, index: &Expression, env: &Environment) -> Result<i64, VladError> {
        let value = self.eval_expression(index, env)?;
        value
            .as_i64()
            .ok_or_else(|| VladError::type_mismatch("int index", value.type_name()))
    }
}

fn lookup_array(name: &str, env: &Environment) -> Result<Vec<Value>, VladError> {
    match env.search(name) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(VladError::type_mismatch("array", other.type_name())
            .with_note(format!("`{}` is indexed but is not an array", name))),
        None => Err(VladError::unbound(name)),
    }
}

fn slot(len: usize, index: i64) -> Result<usize, VladError> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or_else(|| VladError::runtime(VladErrorKind::IndexOutOfBounds { index, len }))
}

/// `x++` / `x--`: the variable keeps its type and the new value is the
/// result.
fn step(name: &str, delta: i64, env: &Environment) -> Result<Value, VladError> {
    let current = env.search(name).ok_or_else(|| VladError::unbound(name))?;
    let next = match current {
        Value::Int(v) => Value::Int(v.wrapping_add(delta)),
        Value::Float(v) => Value::Float(v + delta as f64),
        Value::Char(c) => Value::Char((i64::from(c) + delta) as u8),
        other => {
            return Err(VladError::type_mismatch("numeric variable", other.type_name())
                .with_note(format!("`{}` cannot be incremented or decremented", name)));
        }
    };
    env.assign(name, next.clone())?;
    Ok(next)
}
