//
// prompt.rs
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

use crate::say;
use fibbench_error::{FibError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Asks the operator whether the whole run should stop
pub trait ExitPrompt {
    /// Returns true when the operator chose to exit
    fn confirm_exit(&mut self) -> Result<bool>;
}

/// Reads y/n answers from a console until a valid one arrives
pub struct ConsolePrompt<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    fn next_answer(&mut self) -> Result<char> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(FibError::PromptClosed);
            }
            if let Some(c) = line.chars().find(|c| !c.is_whitespace()) {
                return Ok(c);
            }
        }
    }
}

impl<R: BufRead, W: Write> ExitPrompt for ConsolePrompt<R, W> {
    fn confirm_exit(&mut self) -> Result<bool> {
        loop {
            say(&mut self.out, format_args!("Exit program? y/n"))?;
            let answer = self.next_answer()?;
            debug!("exit prompt answered with {:?}", answer);
            match answer {
                'Y' | 'y' => {
                    say(&mut self.out, format_args!("Exiting program..."))?;
                    return Ok(true);
                }
                'N' | 'n' => {
                    say(&mut self.out, format_args!("Continuing with operations."))?;
                    return Ok(false);
                }
                _ => say(&mut self.out, format_args!("Invalid input."))?,
            }
        }
    }
}

/// Answers every prompt the same way without reading anything
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ExitPrompt for FixedAnswer {
    fn confirm_exit(&mut self) -> Result<bool> {
        Ok(self.0)
    }
}
