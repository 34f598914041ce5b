//
// command.rs
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

use clap::*;
use fibbench_error::{FibError, Result};
use fibbench_harness::benchmark::DEFAULT_THRESHOLD_MS;
use fibbench_harness::{ExitPrompt, FixedAnswer, HarnessConfig, ReferenceTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

const ABOUT: &str = "check fibonacci implementations against a lookup table and time them";

#[derive(Debug, Parser)]
#[clap(name = "fibbench")]
#[clap(about = ABOUT, long_about = None)]
pub struct FibBenchOpts {
    /// Use this index instead of a random one
    #[clap(long)]
    pub index: Option<u8>,
    /// Seed the random index for a reproducible run
    #[clap(long)]
    pub seed: Option<u64>,
    /// Warn once when a single call takes at least this many milliseconds
    #[clap(long, default_value_t = DEFAULT_THRESHOLD_MS)]
    pub threshold_ms: f64,
    /// Answer yes to every exit prompt without reading stdin
    #[clap(long, conflicts_with = "assume_no")]
    pub assume_yes: bool,
    /// Answer no to every exit prompt without reading stdin
    #[clap(long)]
    pub assume_no: bool,
    /// Increase output logging verbosity to DEBUG level.
    #[clap(short, long)]
    pub verbose: bool,
    /// Suppress all output logging (overrides --verbose).
    #[clap(short, long)]
    pub quiet: bool,
}

impl FibBenchOpts {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::OFF
        } else if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        }
    }

    pub fn harness_config(&self) -> Result<HarnessConfig> {
        HarnessConfig::new(self.threshold_ms)
    }

    /// A prompt that never reads stdin, when one of the assume flags is set
    pub fn fixed_prompt(&self) -> Option<Box<dyn ExitPrompt>> {
        if self.assume_yes {
            Some(Box::new(FixedAnswer(true)))
        } else if self.assume_no {
            Some(Box::new(FixedAnswer(false)))
        } else {
            None
        }
    }

    /// The explicit `--index`, or a random byte reduced into the table
    pub fn pick_index(&self, table: &ReferenceTable<'_>) -> Result<u8> {
        if let Some(index) = self.index {
            if index as usize >= table.len() {
                return Err(FibError::IndexOutOfRange {
                    index: index as usize,
                    len: table.len(),
                });
            }
            return Ok(index);
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let raw: u8 = rng.gen();
        debug!("random byte {} with seed {:?}", raw, self.seed);
        table.reduce_index(raw)
    }
}
