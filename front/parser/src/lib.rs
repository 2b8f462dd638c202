// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
pub mod ast;
mod expr;
pub mod import;
mod parser;

use std::path::Path;

use ast::Program;
use error::VladError;
use lexer::{Lexer, LexerConfig, Token};

pub use import::ImportState;
pub use parser::Parser;

/// Parse an already-lexed token stream. Imports resolve against the
/// working directory.
pub fn parse(tokens: Vec<Token>) -> Result<Program, VladError> {
    let mut imports = ImportState::new(LexerConfig::default());
    Parser::new(tokens, "<input>", &mut imports).parse_program()
}

/// Lex and parse `source`; `file` names it in diagnostics and anchors
/// relative imports.
pub fn parse_source(source: &str, file: &str, config: LexerConfig) -> Result<Program, VladError> {
    let mut imports = ImportState::new(config);
    imports.mark_root(Path::new(file));
    parse_source_with(source, file, &mut imports)
}

/// Like [`parse_source`], with an import set that outlives one parse
/// (the REPL keeps one for the whole session).
pub fn parse_source_with(source: &str, file: &str, imports: &mut ImportState) -> Result<Program, VladError> {
    let tokens = Lexer::new_with_file(source, file)
        .with_config(imports.lexer_config)
        .tokenize()?;
    tracing::debug!(file, tokens = tokens.len(), "lexed");

    let program = Parser::new(tokens, file, imports)
        .with_source(source)
        .with_base_dir(Path::new(file).parent())
        .parse_program()?;
    tracing::debug!(file, statements = program.statements.len(), "parsed");
    Ok(program)
}
