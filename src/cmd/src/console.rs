//
// console.rs
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

use std::io::Write;

use fibbench_harness::{
    run_benchmarks, run_validation, summary_table, ExitPrompt, NamedFunction, PassOutcome,
    ReferenceTable,
};
use fiblib::{Variant, LOOKUP_TABLE};
use tracing::info;

use crate::command::FibBenchOpts;

/// How a run ended, both map to exit code 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished,
    OperatorExit,
}

/// Every shipped variant under its report name, in definition order
pub fn shipped_functions() -> Vec<NamedFunction<Variant>> {
    Variant::ALL
        .iter()
        .map(|variant| NamedFunction::new(variant.name(), *variant))
        .collect()
}

/// Picks the index, validates and benchmarks every shipped variant, then
/// prints the summary table.
pub fn start_console(
    opts: &FibBenchOpts,
    prompt: &mut dyn ExitPrompt,
    out: &mut dyn Write,
) -> Result<RunOutcome, anyhow::Error> {
    let config = opts.harness_config()?;
    let table = ReferenceTable::new(&LOOKUP_TABLE);
    let n = opts.pick_index(&table)?;
    info!("the index of this run is {}", n);
    writeln!(out, "The random number 'n' today is {}.\n", n)?;
    out.flush()?;

    let functions = shipped_functions();
    let failures = match run_validation(&functions, n, &table, prompt, out)? {
        PassOutcome::Completed(failures) => failures,
        PassOutcome::Exited => return Ok(RunOutcome::OperatorExit),
    };
    let report = match run_benchmarks(&functions, &failures, n, &config, prompt, out)? {
        PassOutcome::Completed(report) => report,
        PassOutcome::Exited => return Ok(RunOutcome::OperatorExit),
    };
    writeln!(out)?;
    summary_table(&failures, &report).print(out)?;
    out.flush()?;
    Ok(RunOutcome::Finished)
}
