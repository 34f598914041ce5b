//
// fibbench.rs
// Copyright (C) 2026 fibbench authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use clap::Parser;
use colored::Colorize;
use fibbench_cmd::command::FibBenchOpts;
use fibbench_cmd::console::{start_console, RunOutcome};
use fibbench_harness::{ConsolePrompt, ExitPrompt};
use std::io::{stderr, stdin, stdout, Write};
use std::process::ExitCode;
use tracing::info;

fn setup_log(opts: &FibBenchOpts) {
    tracing_subscriber::fmt()
        .with_max_level(opts.log_level())
        .with_writer(stderr)
        .init();
}

fn main() -> ExitCode {
    let opts = FibBenchOpts::parse();
    setup_log(&opts);
    let mut prompt: Box<dyn ExitPrompt> = match opts.fixed_prompt() {
        Some(prompt) => prompt,
        None => Box::new(ConsolePrompt::new(stdin().lock(), stdout())),
    };
    let mut out = stdout();
    match start_console(&opts, &mut *prompt, &mut out) {
        Ok(RunOutcome::Finished) => ExitCode::SUCCESS,
        Ok(RunOutcome::OperatorExit) => {
            info!("stopped by the operator");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _err = writeln!(stderr(), "{}", format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}
