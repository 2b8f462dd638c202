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
use std::rc::Rc;

use super::Interpreter;
use crate::{format_value, Environment, Flow, Value};
use error::{VladError, VladErrorKind};
use parser::ast::{
    Block, Declarator, DeclaratorKind, ElseBranch, Expression, ForInit, ForNode, IfNode, Statement,
    StatementKind, VladType,
};

impl<W: Write> Interpreter<W> {
    /// Errors leaving a statement are stamped with its file and line unless an
    /// inner statement already did so.
    pub(crate) fn eval_statement(&mut self, statement: &Statement, env: &Environment) -> Result<Flow, VladError> {
        self.exec(&statement.kind, env).map_err(|e| e.at_statement(&statement.file, statement.line))
    }

    fn exec(&mut self, kind: &StatementKind, env: &Environment) -> Result<Flow, VladError> {
        match kind {
            StatementKind::Var(declarators) => {
                self.declare_all(declarators, env)?;
                Ok(Flow::Normal(Value::Void))
            }
            StatementKind::If(node) => self.eval_if(node, env),
            StatementKind::While { condition, body } => self.eval_while(condition, body, env),
            StatementKind::For(node) => self.eval_for(node, env),
            StatementKind::Function(node) => {
                tracing::debug!(function = %node.name, params = node.parameters.len(), "declaring function");
                env.declare(&node.name, Value::Function(Rc::new(node.clone())))?;
                Ok(Flow::Normal(Value::Void))
            }
            StatementKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expression(expr, env)?,
                    None => Value::Void,
                };
                Ok(Flow::Return(value))
            }
            StatementKind::Continue => Ok(Flow::Continue),
            StatementKind::Break => Ok(Flow::Break),
            StatementKind::Print(args) => {
                self.print(args, env)?;
                Ok(Flow::Normal(Value::Void))
            }
            StatementKind::Expression(expr) => Ok(Flow::Normal(self.eval_expression(expr, env)?)),
        }
    }

    fn condition(&mut self, expr: &Expression, env: &Environment, construct: &str) -> Result<bool, VladError> {
        let value = self.eval_expression(expr, env)?;
        value.truthy().ok_or_else(|| {
            VladError::type_mismatch("numeric condition", value.type_name())
                .with_note(format!("`{}` conditions must be int, float or char", construct))
        })
    }

    fn eval_if(&mut self, node: &IfNode, env: &Environment) -> Result<Flow, VladError> {
        if self.condition(&node.condition, env, "if")? {
            return self.eval_block(&node.then_block, env);
        }
        match &node.else_branch {
            Some(ElseBranch::If(inner)) => self.eval_if(inner, env),
            Some(ElseBranch::Block(block)) => self.eval_block(block, env),
            None => Ok(Flow::Normal(Value::Void)),
        }
    }

    fn eval_while(&mut self, condition: &Expression, body: &Block, env: &Environment) -> Result<Flow, VladError> {
        while self.condition(condition, env, "while")? {
            match self.eval_block(body, env)? {
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Continue | Flow::Normal(_) => {}
            }
        }
        Ok(Flow::Normal(Value::Void))
    }

    /// One frame holds the loop variable for every iteration.
    fn eval_for(&mut self, node: &ForNode, env: &Environment) -> Result<Flow, VladError> {
        let scope = env.child();

        match &node.init {
            ForInit::Var(declarators) => self.declare_all(declarators, &scope)?,
            ForInit::Expression(expr) => {
                self.eval_expression(expr, &scope)?;
            }
        }

        while self.condition(&node.condition, &scope, "for")? {
            match self.eval_block(&node.body, &scope)? {
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Continue | Flow::Normal(_) => {}
            }
            self.eval_expression(&node.post, &scope)?;
        }
        Ok(Flow::Normal(Value::Void))
    }

    fn declare_all(&mut self, declarators: &[Declarator], env: &Environment) -> Result<(), VladError> {
        for declarator in declarators {
            let value = self.declarator_value(declarator, env)?;
            env.declare(&declarator.name, value)?;
        }
        Ok(())
    }

    fn declarator_value(&mut self, declarator: &Declarator, env: &Environment) -> Result<Value, VladError> {
        let name = &declarator.name;

        match &declarator.kind {
            DeclaratorKind::Default => Ok(Value::default_for(declarator.var_type.unwrap_or(VladType::Void))),
            DeclaratorKind::Initialized(expr) => {
                let value = self.eval_expression(expr, env)?;
                match declarator.var_type {
                    Some(expected) if !value.has_type(expected) => {
                        Err(VladError::type_mismatch(expected.to_string(), value.type_name())
                            .with_note(format!("in the declaration of `{}`", name)))
                    }
                    _ => Ok(value),
                }
            }
            DeclaratorKind::Array { size, init } => {
                let element_type = declarator.var_type.unwrap_or(VladType::Void);
                let size = match self.eval_expression(size, env)? {
                    Value::Float(f) => f as i64,
                    other => other.as_i64().ok_or_else(|| {
                        VladError::type_mismatch("numeric array size", other.type_name())
                            .with_note(format!("in the declaration of `{}`", name))
                    })?,
                };
                let len = usize::try_from(size).map_err(|_| {
                    VladError::type_mismatch("non-negative array size", size.to_string())
                        .with_note(format!("in the declaration of `{}`", name))
                })?;

                let mut elements = Vec::new();
                elements.try_reserve_exact(len).map_err(|e| {
                    VladError::runtime(VladErrorKind::ArrayTooLarge(len))
                        .with_note(format!("in the declaration of `{}`: {}", name, e))
                })?;
                elements.resize(len, Value::default_for(element_type));
                if let Some(init) = init {
                    if init.len() != len {
                        return Err(VladError::type_mismatch(
                            format!("{} initializer(s)", len),
                            format!("{} initializer(s)", init.len()),
                        )
                        .with_note(format!("`{}` is declared with {} element(s)", name, len)));
                    }
                    for (slot, expr) in elements.iter_mut().zip(init) {
                        let value = self.eval_expression(expr, env)?;
                        if !value.has_type(element_type) {
                            return Err(VladError::type_mismatch(element_type.to_string(), value.type_name())
                                .with_note(format!("in the initializer of `{}`", name)));
                        }
                        *slot = value;
                    }
                }
                Ok(Value::Array(elements))
            }
        }
    }

    /// Arguments go on one line separated by spaces. Values without a
    /// printed form are reported and skipped.
    fn print(&mut self, args: &[Expression], env: &Environment) -> Result<(), VladError> {
        let mut pieces = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.eval_expression(arg, env)?;
            match format_value(&value) {
                Some(text) => pieces.push(text),
                None => tracing::error!(value_type = value.type_name(), "cannot print a value of this type"),
            }
        }

        if pieces.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{}", pieces.join(" "))
            .map_err(|e| VladError::runtime(VladErrorKind::OutputError(e.to_string())))
    }
}
