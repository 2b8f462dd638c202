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
use crate::{Environment, Flow, Value};
use error::{VladError, VladErrorKind};
use parser::ast::Expression;

impl<W: Write> Interpreter<W> {
    /// The call frame's parent is the caller's environment, not the one
    /// the function was declared in.
    pub(crate) fn call_function(&mut self, name: &str, args: &[Expression], env: &Environment) -> Result<Value, VladError> {
        let call_env = env.child();

        let function = match env.search(name) {
            Some(Value::Function(function)) => function,
            Some(other) => {
                return Err(VladError::runtime(VladErrorKind::NotCallable(name.to_string()))
                    .with_note(format!("`{}` is a {}", name, other.type_name())));
            }
            None => return Err(VladError::unbound(name)),
        };

        if args.len() != function.parameters.len() {
            return Err(VladError::runtime(VladErrorKind::ArityMismatch {
                name: name.to_string(),
                expected: function.parameters.len(),
                found: args.len(),
            }));
        }

        for (param, arg) in function.parameters.iter().zip(args) {
            let value = self.eval_expression(arg, env)?;
            call_env.declare(&param.name, value)?;
        }

        tracing::debug!(function = name, args = args.len(), "call");
        let result = match self.eval_block(&function.body, &call_env)? {
            Flow::Normal(value) | Flow::Return(value) => value,
            Flow::Break => return Err(escaped("break", name)),
            Flow::Continue => return Err(escaped("continue", name)),
        };

        if !result.has_type(function.return_type) {
            tracing::debug!(
                function = name,
                declared = %function.return_type,
                actual = result.type_name(),
                "return value does not match declared type"
            );
        }
        Ok(result)
    }
}

fn escaped(keyword: &str, function: &str) -> VladError {
    VladError::runtime(VladErrorKind::ControlFlowOutsideLoop(keyword.to_string()))
        .with_note(format!("`{}` escaped the body of `{}`", keyword, function))
}
