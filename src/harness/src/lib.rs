//
// lib.rs
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

//! Checks fibonacci implementations against a reference table and times the
//! ones that pass.
//!
//! The two passes share one rule: a function is benchmarked if and only if
//! its name is absent from the [`FailureSet`] the validation pass produced.

use std::fmt;
use std::io::{self, Write};

pub mod benchmark;
pub mod function;
pub mod prompt;
pub mod report;
pub mod validation;

pub use benchmark::{run_benchmarks, BenchmarkRecord, BenchmarkReport, HarnessConfig, Timing};
pub use function::{FailureSet, NamedFunction, ReferenceTable};
pub use prompt::{ConsolePrompt, ExitPrompt, FixedAnswer};
pub use report::summary_table;
pub use validation::run_validation;

/// How a pass ended
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutcome<T> {
    Completed(T),
    /// the operator confirmed exit at a prompt
    Exited,
}

impl<T> PassOutcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            PassOutcome::Completed(t) => Some(t),
            PassOutcome::Exited => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        matches!(self, PassOutcome::Exited)
    }
}

/// Writes one status line and flushes it right away
pub(crate) fn say<W: Write + ?Sized>(out: &mut W, args: fmt::Arguments<'_>) -> io::Result<()> {
    out.write_fmt(args)?;
    out.write_all(b"\n")?;
    out.flush()
}
