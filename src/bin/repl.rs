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

use anyhow::Result;
use lexer::LexerConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use vlad::{logging, Session};

fn main() -> Result<()> {
    logging::init(false);

    let mut rl = DefaultEditor::new()?;
    let mut session = Session::new(io::stdout(), LexerConfig::default());
    println!("Vlad REPL. Each line is evaluated in one global scope; Ctrl-D exits.");

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;

                match session.eval_line(&line) {
                    Ok(Some(value)) => println!("{}", value),
                    Ok(None) => {}
                    Err(err) => err.display(),
                }
            }

            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }

            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }

            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
