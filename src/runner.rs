// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use std::fs;
use std::io::Write;
use std::process;

use crate::RunConfig;
use error::{VladError, VladErrorKind};
use interpreter::Interpreter;
use lexer::{Lexer, LexerConfig};

/// Run a program held in memory. `print` output goes to `out`, which is
/// handed back on success.
pub fn run_source<W: Write>(source: &str, out: W) -> Result<W, VladError> {
    let program = parser::parse_source(source, "<input>", LexerConfig::default())?;
    let mut interpreter = Interpreter::new(out);
    interpreter
        .run(&program)
        .map_err(|e| locate(e, "<input>", source))?;
    Ok(interpreter.into_output())
}

/// Read, lex, parse and run `config.source`, dumping the stages the
/// debug flags ask for.
pub fn run_file<W: Write>(config: &RunConfig, out: W) -> Result<W, VladError> {
    let path = &config.source;
    let file = path.display().to_string();

    let code = fs::read_to_string(path).map_err(|e| {
        VladError::new(
            VladErrorKind::FileReadError(file.clone()),
            format!("failed to read file `{}`", file),
            file.clone(),
            0,
            0,
        )
        .with_note(e.to_string())
        .with_help("check if the file exists and you have permission to read it")
    })?;
    tracing::debug!(file = %file, bytes = code.len(), "read source");

    if config.debug.tokens {
        let tokens = Lexer::new_with_file(&code, file.clone())
            .with_config(config.lexer)
            .tokenize()?;
        eprintln!("Tokens:");
        for token in &tokens {
            eprintln!("{:>5}  {:?}  {:?}", token.line, token.token_type, token.lexeme);
        }
    }

    let program = parser::parse_source(&code, &file, config.lexer)?;

    if config.debug.ast {
        eprintln!("AST:\n{:#?}", program);
    }

    let mut interpreter = Interpreter::new(out);
    interpreter.run(&program).map_err(|e| locate(e, &file, &code))?;
    Ok(interpreter.into_output())
}

/// CLI entry: on any error, render the diagnostic and exit with status 1.
pub fn run_or_exit<W: Write>(config: &RunConfig, out: W) {
    match run_file(config, out) {
        Ok(mut out) => {
            if let Err(e) = out.flush() {
                VladError::runtime(VladErrorKind::OutputError(e.to_string())).display();
                process::exit(1);
            }
        }
        Err(err) => {
            err.display();
            process::exit(1);
        }
    }
}

/// Give a runtime error the source text of the file it was stamped with.
/// Statements spliced in by `import` carry their own file, which is read
/// back from disk; an unstamped error is pinned on the program being run.
pub(crate) fn locate(err: VladError, file: &str, code: &str) -> VladError {
    if err.source_code.is_some() {
        return err;
    }
    if err.file == "<runtime>" || err.file == file {
        return err.with_file(file).with_source_code(code);
    }
    match fs::read_to_string(&err.file) {
        Ok(imported) => err.with_source_code(imported),
        Err(_) => err,
    }
}
