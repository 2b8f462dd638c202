// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
//! Whole programs run through the public entry point.

use error::{Phase, VladErrorKind};

fn run(source: &str) -> String {
    let out = vlad::run_source(source, Vec::new()).unwrap_or_else(|e| panic!("{}", e));
    String::from_utf8(out).unwrap()
}

#[test]
fn fibonacci_iterative_and_recursive() {
    let out = run(r#"
fun fib(n: int) -> int {
    if (n < 2) { return n; }
    return fib(n - 1) + fib(n-2);
}

var a = 0, b = 1;
for (var i = 0; i < 10; i++) {
    var t = a + b;
    a = b;
    b = t;
}
print(a, fib(10));
"#);
    assert_eq!(out, "55 55\n");
}

#[test]
fn bubble_sort_in_place() {
    let out = run(r#"
var a[6]: int = {5, 3, 9, -2, 7, 0};
var n = 6;
for (var i = 0; i < n; i++) {
    for (var j = 0; j < n - i - 1; j++) {
        if (a[j] > a[j + 1]) {
            var t = a[j];
            a[j] = a[j + 1];
            a[j + 1] = t;
        }
    }
}
for (var k = 0; k < n; k++) { print(a[k]); }
"#);
    assert_eq!(out, "-2\n0\n3\n5\n7\n9\n");
}

#[test]
fn mixed_arithmetic_and_formatting() {
    let out = run(r#"
print(7 / 2, 7.0 / 2, 7 - 10);
print('a', 'a' + 1, 1.5 * 'b');
print("tab\there", 1 < 2, 2 <= 1, !0, 3 == 3.0);
"#);
    assert_eq!(out, "3 3.500000 -3\n97 98 147.000000\ntab\there 1 0 1 1\n");
}

#[test]
fn while_with_continue_and_break() {
    let out = run(r#"
var i = 0, total = 0;
while (1) {
    i++;
    if (i > 10) { break; }
    if (i == 3 || i == 5) { continue; }
    total = total + i;
}
print(total);
"#);
    assert_eq!(out, "47\n");
}

#[test]
fn else_if_chains() {
    let out = run(r#"
fun grade(score) -> char {
    if (score >= 90) { return 'A'; }
    else if (score >= 80) { return 'B'; }
    else { return 'C'; }
}
print(grade(95), grade(85), grade(10));
"#);
    assert_eq!(out, "65 66 67\n");
}

#[test]
fn comments_are_ignored() {
    let out = run("// leading\nvar x = 1; /* inline */ print(x); /* multi\nline */\n");
    assert_eq!(out, "1\n");
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(run(""), "");
    assert_eq!(run("  // only a comment\n"), "");
}

#[test]
fn failures_carry_their_phase() {
    let err = vlad::run_source("var s = \"open;", Vec::new()).unwrap_err();
    assert_eq!(err.phase(), Phase::Lex);

    let err = vlad::run_source("var x = ;", Vec::new()).unwrap_err();
    assert_eq!(err.phase(), Phase::Parse);

    let err = vlad::run_source("var z = 0;\nprint(1 / z);", Vec::new()).unwrap_err();
    assert_eq!(err.kind, VladErrorKind::DivisionByZero);
    assert_eq!(err.line, 2);
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut out = Vec::new();
    let program = parser::parse_source("print(1);\nprint(missing);", "<input>", lexer::LexerConfig::default()).unwrap();
    let mut interpreter = interpreter::Interpreter::new(&mut out);
    assert!(interpreter.run(&program).is_err());
    drop(interpreter);
    assert_eq!(out, b"1\n");
}
