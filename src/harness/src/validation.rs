//
// validation.rs
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

use crate::function::{FailureSet, NamedFunction, ReferenceTable};
use crate::prompt::ExitPrompt;
use crate::{say, PassOutcome};
use fibbench_error::Result;
use fiblib::Fibonacci;
use std::io::Write;
use tracing::{info, warn};

/// Calls every function once with `n` and collects the names whose result
/// differs from `table[n]`.
///
/// Functions run in definition order. After each mismatch the operator is
/// asked whether to exit; a confirmed exit ends the pass with
/// `PassOutcome::Exited`.
pub fn run_validation<F, P, W>(
    functions: &[NamedFunction<F>],
    n: u8,
    table: &ReferenceTable<'_>,
    prompt: &mut P,
    out: &mut W,
) -> Result<PassOutcome<FailureSet>>
where
    F: Fibonacci,
    P: ExitPrompt + ?Sized,
    W: Write + ?Sized,
{
    let expected = table.expected(n)?;
    info!("validating {} functions at n = {}", functions.len(), n);
    let mut failures = FailureSet::new();
    for function in functions {
        let actual = function.call(n);
        if actual != expected {
            warn!(
                "{}({}) returned {} but the reference is {}",
                function.name(),
                n,
                actual,
                expected
            );
            say(out, format_args!("{}({}) failed.", function.name(), n))?;
            if prompt.confirm_exit()? {
                return Ok(PassOutcome::Exited);
            }
            failures.insert(function.name());
        } else {
            say(out, format_args!("{}({}) succeeded.", function.name(), n))?;
        }
    }
    say(out, format_args!("All functions have been tested."))?;
    if !failures.is_empty() {
        say(out, format_args!("The following functions failed:"))?;
        say(out, format_args!("{}", failures.joined()))?;
    }
    say(out, format_args!(""))?;
    Ok(PassOutcome::Completed(failures))
}
