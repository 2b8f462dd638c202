// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
//! Operator semantics over runtime values.

use crate::Value;
use error::{VladError, VladErrorKind};
use parser::ast::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericType {
    Int,
    Float,
    Char,
}

fn numeric_type(value: &Value) -> Option<NumericType> {
    match value {
        Value::Int(_) => Some(NumericType::Int),
        Value::Float(_) => Some(NumericType::Float),
        Value::Char(_) => Some(NumericType::Char),
        _ => None,
    }
}

/// Result type of arithmetic. Not commutative: char yields to whatever
/// it is paired with, and int only yields to float.
fn dominant(left: NumericType, right: NumericType) -> NumericType {
    match left {
        NumericType::Int if right == NumericType::Float => NumericType::Float,
        NumericType::Int => NumericType::Int,
        NumericType::Float => NumericType::Float,
        NumericType::Char => right,
    }
}

fn operand_error(operator: Operator, value: &Value) -> VladError {
    VladError::type_mismatch("numeric operand", value.type_name())
        .with_note(format!("`{}` is defined for int, float and char", operator))
}

fn numeric_operands(operator: Operator, left: &Value, right: &Value) -> Result<(NumericType, NumericType), VladError> {
    let l = numeric_type(left).ok_or_else(|| operand_error(operator, left))?;
    let r = numeric_type(right).ok_or_else(|| operand_error(operator, right))?;
    Ok((l, r))
}

pub fn binary(operator: Operator, left: &Value, right: &Value) -> Result<Value, VladError> {
    match operator {
        Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
            arithmetic(operator, left, right)
        }
        Operator::Greater
        | Operator::Less
        | Operator::GreaterEqual
        | Operator::LessEqual
        | Operator::Equal
        | Operator::NotEqual => compare(operator, left, right),
        Operator::LogicalAnd | Operator::LogicalOr => logical(operator, left, right),
    }
}

fn arithmetic(operator: Operator, left: &Value, right: &Value) -> Result<Value, VladError> {
    let (l, r) = numeric_operands(operator, left, right)?;

    match dominant(l, r) {
        NumericType::Float => {
            let (a, b) = (float(left), float(right));
            let v = match operator {
                Operator::Add => a + b,
                Operator::Subtract => a - b,
                Operator::Multiply => a * b,
                _ => a / b,
            };
            Ok(Value::Float(v))
        }
        result => {
            // Only reachable with int/char on both sides.
            let (a, b) = (integer(left), integer(right));
            let v = match operator {
                Operator::Add => a.wrapping_add(b),
                Operator::Subtract => a.wrapping_sub(b),
                Operator::Multiply => a.wrapping_mul(b),
                _ => {
                    if b == 0 {
                        return Err(VladError::runtime(VladErrorKind::DivisionByZero)
                            .with_help("integer and char division need a nonzero divisor"));
                    }
                    a.wrapping_div(b)
                }
            };
            Ok(if result == NumericType::Char { Value::Char(v as u8) } else { Value::Int(v) })
        }
    }
}

fn compare(operator: Operator, left: &Value, right: &Value) -> Result<Value, VladError> {
    let (l, r) = numeric_operands(operator, left, right)?;

    let ordering = if l == NumericType::Float || r == NumericType::Float {
        float(left).partial_cmp(&float(right))
    } else {
        Some(integer(left).cmp(&integer(right)))
    };

    use std::cmp::Ordering::*;
    let result = match (operator, ordering) {
        (Operator::Greater, Some(o)) => o == Greater,
        (Operator::Less, Some(o)) => o == Less,
        (Operator::GreaterEqual, Some(o)) => o != Less,
        (Operator::LessEqual, Some(o)) => o != Greater,
        (Operator::Equal, Some(o)) => o == Equal,
        (Operator::NotEqual, Some(o)) => o != Equal,
        // NaN compares unequal to everything.
        (Operator::NotEqual, None) => true,
        (_, None) => false,
        _ => false,
    };
    Ok(Value::bool(result))
}

fn logical(operator: Operator, left: &Value, right: &Value) -> Result<Value, VladError> {
    let a = left.truthy().ok_or_else(|| operand_error(operator, left))?;
    let b = right.truthy().ok_or_else(|| operand_error(operator, right))?;
    let result = match operator {
        Operator::LogicalAnd => a && b,
        _ => a || b,
    };
    Ok(Value::bool(result))
}

pub fn not(value: &Value) -> Result<Value, VladError> {
    let truth = value.truthy().ok_or_else(|| {
        VladError::type_mismatch("numeric operand", value.type_name())
            .with_note("`!` is defined for int, float and char")
    })?;
    Ok(Value::bool(!truth))
}

fn float(value: &Value) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

fn integer(value: &Value) -> i64 {
    value.as_i64().unwrap_or(0)
}
