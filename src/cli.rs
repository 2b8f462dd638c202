// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::{logging, runner, DebugFlags, RunConfig};
use lexer::LexerConfig;

#[derive(Parser, Debug)]
#[command(name = "vlad", author, version, about = "Run a Vlad program", long_about = None)]
pub struct Cli {
    /// The source file to run
    pub file: PathBuf,

    /// Dump stages to stderr before running: tokens, ast or all (comma separated)
    #[arg(long, value_name = "MODES")]
    pub debug: Option<String>,

    /// Longest string literal the lexer accepts, in bytes
    #[arg(long, value_name = "N", default_value_t = LexerConfig::default().max_string_len)]
    pub max_string_len: usize,

    /// Longest identifier the lexer accepts
    #[arg(long, value_name = "N", default_value_t = LexerConfig::default().max_identifier_len)]
    pub max_ident_len: usize,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> RunConfig {
        let debug = self.debug.as_deref().map(DebugFlags::parse).unwrap_or_default();
        let lexer = LexerConfig::default()
            .max_string_len(self.max_string_len)
            .max_identifier_len(self.max_ident_len);

        RunConfig::new(&self.file)
            .with_lexer_config(lexer)
            .with_debug(debug)
            .with_verbose(self.verbose)
    }
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            process::exit(code);
        }
    };

    logging::init(cli.verbose);
    let config = cli.config();
    tracing::debug!(?config, "starting");

    runner::run_or_exit(&config, io::stdout().lock());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_build_the_run_config() {
        let cli = Cli::try_parse_from(["vlad", "--debug=tokens", "--max-string-len", "16", "-v", "main.vl"]).unwrap();
        let config = cli.config();
        assert_eq!(config.source, PathBuf::from("main.vl"));
        assert!(config.debug.tokens && !config.debug.ast);
        assert_eq!(config.lexer.max_string_len, 16);
        assert_eq!(config.lexer.max_identifier_len, LexerConfig::default().max_identifier_len);
        assert!(config.verbose);
    }

    #[test]
    fn exactly_one_source_file() {
        assert!(Cli::try_parse_from(["vlad"]).is_err());
        assert!(Cli::try_parse_from(["vlad", "a.vl", "b.vl"]).is_err());
    }
}
