// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
pub mod cli;
pub mod config;
pub mod flags;
pub mod logging;
pub mod repl;
pub mod runner;

pub use config::RunConfig;
pub use flags::DebugFlags;
pub use repl::Session;
pub use runner::{run_file, run_source};
