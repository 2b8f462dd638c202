// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
mod call;
mod expr;
mod stmt;

use std::io::Write;

use crate::{Environment, Flow, Value};
use error::VladError;
use parser::ast::{Block, Program, StatementKind};

/// Evaluates programs against one global frame; `print` writes to `out`.
pub struct Interpreter<W: Write> {
    globals: Environment,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Interpreter {
            globals: Environment::new(),
            out,
        }
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run top-level statements in the global frame. A `return`, `break`
    /// or `continue` reaching the root is dropped and the next statement
    /// runs.
    pub fn run(&mut self, program: &Program) -> Result<(), VladError> {
        self.run_interactive(program).map(|_| ())
    }

    /// Same as [`run`](Self::run), but hands back the value of a trailing
    /// expression statement so the REPL can echo it.
    pub fn run_interactive(&mut self, program: &Program) -> Result<Option<Value>, VladError> {
        let globals = self.globals.clone();
        let mut echo = None;

        for statement in &program.statements {
            match self.eval_statement(statement, &globals)? {
                Flow::Normal(value) => {
                    echo = match (&statement.kind, value) {
                        (_, Value::Void) => None,
                        (StatementKind::Expression(_), value) => Some(value),
                        _ => None,
                    };
                }
                abrupt => {
                    tracing::debug!(line = statement.line, flow = ?abrupt, "payload reached program root, discarded");
                    echo = None;
                }
            }
        }

        Ok(echo)
    }

    /// Evaluate `block` in a fresh child of `env`, stopping at the first
    /// abrupt statement.
    pub(crate) fn eval_block(&mut self, block: &Block, env: &Environment) -> Result<Flow, VladError> {
        let scope = env.child();
        let mut last = Value::Void;

        for statement in &block.statements {
            match self.eval_statement(statement, &scope)? {
                Flow::Normal(value) => last = value,
                abrupt => return Ok(abrupt),
            }
        }

        Ok(Flow::Normal(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error::{Phase, VladErrorKind};
    use lexer::LexerConfig;

    fn run(source: &str) -> Result<String, VladError> {
        let program = parser::parse_source(source, "<test>", LexerConfig::default())?;
        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.run(&program)?;
        Ok(String::from_utf8(interpreter.into_output()).unwrap())
    }

    fn runtime_error(source: &str) -> VladError {
        let err = run(source).unwrap_err();
        assert_eq!(err.phase(), Phase::Runtime, "{}", err);
        err
    }

    #[test]
    fn precedence_and_right_assignment() {
        assert_eq!(run("print(2 + 3 * 4);").unwrap(), "14\n");
        assert_eq!(run("var a = 0, b = 0; a = b = 5; print(a, b);").unwrap(), "5 5\n");
    }

    #[test]
    fn type_dominance() {
        let out = run("var x: int = 3; var y: float = 2.0; print(x + y);\n\
                       var c: char = 'A'; var i: int = 1; print(c + i, i + c);")
        .unwrap();
        assert_eq!(out, "5.000000\n66 66\n");
        assert_eq!(run("var c = 'A'; var d = c + 1.5; print(d);").unwrap(), "66.500000\n");
    }

    #[test]
    fn block_scoped_variables_disappear() {
        let err = runtime_error("if (1) { var inner = 1; }\nprint(inner);");
        assert_eq!(err.kind, VladErrorKind::UnboundSymbol("inner".into()));
        assert_eq!(err.line, 2);
    }

    #[test]
    fn shadowing_in_nested_block() {
        let out = run("var x = 1; while (x == 1) { var x = 2; print(x); break; } print(x);").unwrap();
        assert_eq!(out, "2\n1\n");
    }

    #[test]
    fn redeclaration_in_same_frame_is_fatal() {
        let err = runtime_error("var x = 1;\nvar x = 2;");
        assert_eq!(err.kind, VladErrorKind::AlreadyBound("x".into()));
        assert_eq!(err.line, 2);
    }

    #[test]
    fn break_leaves_only_the_innermost_loop() {
        let out = run(
            "for (var i = 0; i < 2; i++) {\n\
               var j = 0;\n\
               while (1) { j++; if (j == 2) { break; } }\n\
               print(i, j);\n\
             }",
        )
        .unwrap();
        assert_eq!(out, "0 2\n1 2\n");
    }

    #[test]
    fn continue_still_runs_the_for_post_expression() {
        let out = run("for (var i = 0; i < 4; i++) { if (i == 1) { continue; } print(i); }").unwrap();
        assert_eq!(out, "0\n2\n3\n");
    }

    #[test]
    fn for_loop_variable_is_scoped_to_the_loop() {
        let err = runtime_error("for (var i = 0; i < 1; i++) { }\nprint(i);");
        assert_eq!(err.kind, VladErrorKind::UnboundSymbol("i".into()));
    }

    #[test]
    fn return_unwinds_nested_loops() {
        let out = run(
            "fun find(limit) -> int {\n\
               var i = 0;\n\
               while (1) { for (var k = 0; k < 10; k++) { if (i * 10 + k == limit) { return k; } } i++; }\n\
               return -1;\n\
             }\n\
             print(find(23));",
        )
        .unwrap();
        assert_eq!(out, "3\n");
    }

    #[test]
    fn recursion() {
        let out = run("fun fact(n: int) -> int { if (n <= 1) { return 1; } return n * fact(n-1); } print(fact(10));").unwrap();
        assert_eq!(out, "3628800\n");
    }

    #[test]
    fn arrays_are_written_back_through_the_environment() {
        assert_eq!(run("var a[3]: int; a[1] = 7; print(a[1], a[0]);").unwrap(), "7 0\n");
        assert_eq!(run("var a[3]: int {1, 2, 3}; a[2] = a[0] + a[1]; print(a[2]);").unwrap(), "3\n");
        assert_eq!(run("var a = {4, 5}; var b = a; b[0] = 9; print(a[0], b[0]);").unwrap(), "4 9\n");
    }

    #[test]
    fn array_write_inside_a_function_reaches_the_caller_frame() {
        let out = run("var a[2]: int; fun set(i, v) { a[i] = v; } set(1, 42); print(a[1]);").unwrap();
        assert_eq!(out, "42\n");
    }

    #[test]
    fn array_initializer_count_must_match() {
        let err = runtime_error("var a[2]: int = {1, 2, 3};");
        assert!(matches!(err.kind, VladErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn oversized_array_is_a_runtime_error() {
        let err = runtime_error("var ok = 1;\nvar a[4611686018427387904]: int;");
        assert_eq!(err.kind, VladErrorKind::ArrayTooLarge(4611686018427387904));
        assert_eq!(err.line, 2);
        let err = runtime_error("var b[9223372036854775807]: char;");
        assert!(matches!(err.kind, VladErrorKind::ArrayTooLarge(_)));
    }

    #[test]
    fn array_index_is_bounds_checked() {
        let err = runtime_error("var a[2]: int; print(a[2]);");
        assert_eq!(err.kind, VladErrorKind::IndexOutOfBounds { index: 2, len: 2 });
        let err = runtime_error("var a[2]: int; a[-1] = 1;");
        assert_eq!(err.kind, VladErrorKind::IndexOutOfBounds { index: -1, len: 2 });
    }

    #[test]
    fn typed_initializer_must_match_exactly() {
        let err = runtime_error("var x: int = 2.5;");
        assert!(matches!(err.kind, VladErrorKind::TypeMismatch { .. }));
        assert_eq!(run("var s: string = \"ok\"; print(s);").unwrap(), "ok\n");
    }

    #[test]
    fn default_values() {
        assert_eq!(run("var i: int, f: float, c: char; print(i, f, c);").unwrap(), "0 0.000000 0\n");
    }

    #[test]
    fn post_increment_keeps_type_and_yields_new_value() {
        assert_eq!(run("var f = 1.5; print(f++); print(f);").unwrap(), "2.500000\n2.500000\n");
        assert_eq!(run("var c = 'a'; c++; print(c);").unwrap(), "98\n");
        assert_eq!(run("var i = 0; print(i--);").unwrap(), "-1\n");
        let err = runtime_error("var s = \"x\"; s++;");
        assert!(matches!(err.kind, VladErrorKind::TypeMismatch { .. }));
        let err = runtime_error("nope++;");
        assert_eq!(err.kind, VladErrorKind::UnboundSymbol("nope".into()));
    }

    #[test]
    fn call_arity_is_checked() {
        let def = "fun add(a, b) -> int { return a + b; }\n";
        assert_eq!(run(&format!("{}print(add(2, 3));", def)).unwrap(), "5\n");
        for call in ["add(1);", "add(1, 2, 3);"] {
            let err = runtime_error(&format!("{}{}", def, call));
            assert!(matches!(err.kind, VladErrorKind::ArityMismatch { expected: 2, .. }));
        }
    }

    #[test]
    fn call_frame_hangs_off_the_caller_environment() {
        // `probe` sees `local` only because the call happens inside the
        // block that declares it.
        let out = run(
            "fun probe() -> int { return local; }\n\
             if (1) { var local = 7; print(probe()); }",
        )
        .unwrap();
        assert_eq!(out, "7\n");
        let err = runtime_error("fun probe() -> int { return local; }\nprint(probe());");
        assert_eq!(err.kind, VladErrorKind::UnboundSymbol("local".into()));
    }

    #[test]
    fn calling_a_non_function() {
        let err = runtime_error("var f = 1; f();");
        assert_eq!(err.kind, VladErrorKind::NotCallable("f".into()));
        let err = runtime_error("missing();");
        assert_eq!(err.kind, VladErrorKind::UnboundSymbol("missing".into()));
    }

    #[test]
    fn functions_are_ordinary_bindings() {
        let out = run("if (1) { fun twice(x) -> int { return x * 2; } print(twice(4)); }").unwrap();
        assert_eq!(out, "8\n");
        let err = runtime_error("if (1) { fun twice(x) -> int { return x * 2; } }\ntwice(1);");
        assert_eq!(err.kind, VladErrorKind::UnboundSymbol("twice".into()));
    }

    #[test]
    fn function_without_return_yields_last_value_and_void_return_prints_nothing() {
        assert_eq!(run("fun f() { 40 + 2; } print(f());").unwrap(), "42\n");
        assert_eq!(run("fun g() { return; } print(g());").unwrap(), "");
    }

    #[test]
    fn break_escaping_a_function_is_fatal() {
        let err = runtime_error("fun f() { break; }\nwhile (1) { f(); }");
        assert_eq!(err.kind, VladErrorKind::ControlFlowOutsideLoop("break".into()));
    }

    #[test]
    fn payload_at_root_is_discarded() {
        let out = run("print(1); if (1) { break; } print(2); return; print(3); continue;").unwrap();
        assert_eq!(out, "1\n2\n3\n");
    }

    #[test]
    fn conditions_must_be_numeric() {
        let err = runtime_error("if (\"yes\") { }");
        assert!(matches!(err.kind, VladErrorKind::TypeMismatch { .. }));
        let err = runtime_error("while ({1}) { }");
        assert!(matches!(err.kind, VladErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn else_if_chain_picks_one_branch() {
        let program = "fun grade(n) { if (n > 8) { print(\"a\"); } else if (n > 4) { print(\"b\"); } else { print(\"c\"); } }\n\
                       grade(9); grade(5); grade(1);";
        assert_eq!(run(program).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn logic_and_not() {
        assert_eq!(run("print(1 && 0, 1 || 0, !0, !2.5);").unwrap(), "0 1 1 0\n");
    }

    #[test]
    fn division_by_zero() {
        let err = runtime_error("var z = 0;\nprint(1 / z);");
        assert_eq!(err.kind, VladErrorKind::DivisionByZero);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn unprintable_values_are_skipped() {
        assert_eq!(run("var a = {1}; print(a);").unwrap(), "");
        assert_eq!(run("var a = {1}; print(\"a:\", a, 2);").unwrap(), "a: 2\n");
    }

    #[test]
    fn end_to_end_counter() {
        let out = run("var x = 1; while (x <= 3) { print(x); x = x + 1; }").unwrap();
        assert_eq!(out, "1\n2\n3\n");
    }

    #[test]
    fn repl_echo_only_for_expression_statements() {
        let mut interpreter = Interpreter::new(Vec::new());
        let parse = |src: &str| parser::parse_source(src, "<repl>", LexerConfig::default()).unwrap();

        assert_eq!(interpreter.run_interactive(&parse("var x = 2;")).unwrap(), None);
        assert_eq!(interpreter.run_interactive(&parse("x * 21;")).unwrap(), Some(Value::Int(42)));
        assert_eq!(interpreter.run_interactive(&parse("print(x);")).unwrap(), None);
        assert_eq!(interpreter.globals().search("x"), Some(Value::Int(2)));
    }
}
