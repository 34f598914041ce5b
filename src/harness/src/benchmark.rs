//
// benchmark.rs
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

use crate::function::{FailureSet, NamedFunction};
use crate::prompt::ExitPrompt;
use crate::{say, PassOutcome};
use fibbench_error::{FibError, Result};
use fiblib::Fibonacci;
use std::hint::black_box;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

pub const DEFAULT_THRESHOLD_MS: f64 = 30000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarnessConfig {
    threshold_ms: f64,
}

impl HarnessConfig {
    pub fn new(threshold_ms: f64) -> Result<Self> {
        if !threshold_ms.is_finite() || threshold_ms <= 0.0 {
            return Err(FibError::InvalidThreshold(format!(
                "{}ms, expected a positive number of milliseconds",
                threshold_ms
            )));
        }
        Ok(Self { threshold_ms })
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            threshold_ms: DEFAULT_THRESHOLD_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timing {
    Timed(f64),
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub name: String,
    pub timing: Timing,
}

/// Records in definition order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkReport {
    pub records: Vec<BenchmarkRecord>,
    pub threshold_notice_fired: bool,
}

impl BenchmarkReport {
    pub fn elapsed_ms(&self, name: &str) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .and_then(|r| match r.timing {
                Timing::Timed(ms) => Some(ms),
                Timing::Skipped => None,
            })
    }
}

/// Times one call of every function that is not in `failures`.
///
/// The threshold notice is armed once per invocation: the first function
/// whose elapsed time meets or exceeds the threshold triggers the notice and
/// the exit prompt, later ones are only reported.
pub fn run_benchmarks<F, P, W>(
    functions: &[NamedFunction<F>],
    failures: &FailureSet,
    n: u8,
    config: &HarnessConfig,
    prompt: &mut P,
    out: &mut W,
) -> Result<PassOutcome<BenchmarkReport>>
where
    F: Fibonacci,
    P: ExitPrompt + ?Sized,
    W: Write + ?Sized,
{
    info!("benchmarking {} functions at n = {}", functions.len(), n);
    let mut report = BenchmarkReport::default();
    let mut threshold_armed = true;
    for function in functions {
        if failures.contains(function.name()) {
            say(
                out,
                format_args!(
                    "{}({}) was not benchmarked, because it failed during testing.",
                    function.name(),
                    n
                ),
            )?;
            report.records.push(BenchmarkRecord {
                name: function.name().to_string(),
                timing: Timing::Skipped,
            });
            continue;
        }

        let start = Instant::now();
        let _ = black_box(function.call(black_box(n)));
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!("{}({}) took {}ms", function.name(), n, elapsed_ms);

        say(
            out,
            format_args!("{}({}) executed at {:.5}ms.", function.name(), n, elapsed_ms),
        )?;
        report.records.push(BenchmarkRecord {
            name: function.name().to_string(),
            timing: Timing::Timed(elapsed_ms),
        });

        if threshold_armed && elapsed_ms >= config.threshold_ms() {
            warn!(
                "{}({}) exceeded the threshold of {}ms",
                function.name(),
                n,
                config.threshold_ms()
            );
            say(
                out,
                format_args!(
                    "{}({}) is taking longer than the threshold ({}ms).",
                    function.name(),
                    n,
                    config.threshold_ms()
                ),
            )?;
            report.threshold_notice_fired = true;
            if prompt.confirm_exit()? {
                return Ok(PassOutcome::Exited);
            }
            threshold_armed = false;
        }
    }
    say(out, format_args!("All functions have been benchmarked."))?;
    Ok(PassOutcome::Completed(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::FixedAnswer;
    use std::thread;
    use std::time::Duration;
    use test_case::test_case;

    struct Sleepy(u64);

    impl Fibonacci for Sleepy {
        fn compute(&self, n: u8) -> u64 {
            thread::sleep(Duration::from_millis(self.0));
            fiblib::LOOKUP_TABLE[n as usize]
        }
    }

    struct CountingPrompt(usize);

    impl ExitPrompt for CountingPrompt {
        fn confirm_exit(&mut self) -> Result<bool> {
            self.0 += 1;
            Ok(false)
        }
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-1.0 ; "negative")]
    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinite")]
    fn test_invalid_threshold(threshold_ms: f64) {
        assert!(matches!(
            HarnessConfig::new(threshold_ms),
            Err(FibError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(30000.0, HarnessConfig::default().threshold_ms());
    }

    #[test]
    fn test_skips_failed_functions() -> Result<()> {
        let functions = vec![
            NamedFunction::new("slow", Sleepy(0)),
            NamedFunction::new("broken", Sleepy(0)),
        ];
        let mut failures = FailureSet::new();
        failures.insert("broken");
        let mut out: Vec<u8> = Vec::new();
        let report = run_benchmarks(
            &functions,
            &failures,
            10,
            &HarnessConfig::default(),
            &mut FixedAnswer(false),
            &mut out,
        )?
        .completed()
        .unwrap();

        assert_eq!(2, report.records.len());
        assert!(report.elapsed_ms("slow").unwrap() >= 0.0);
        assert_eq!(Timing::Skipped, report.records[1].timing);
        assert!(!report.threshold_notice_fired);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("broken(10) was not benchmarked, because it failed during testing.\n"));
        assert!(!out.contains("broken(10) executed"));
        assert!(out.contains("slow(10) executed at "));
        assert!(out.ends_with("All functions have been benchmarked.\n"));
        Ok(())
    }

    #[test]
    fn test_threshold_notice_fires_once() -> Result<()> {
        let functions = vec![
            NamedFunction::new("first", Sleepy(5)),
            NamedFunction::new("second", Sleepy(5)),
            NamedFunction::new("third", Sleepy(5)),
        ];
        let mut prompt = CountingPrompt(0);
        let mut out: Vec<u8> = Vec::new();
        let report = run_benchmarks(
            &functions,
            &FailureSet::new(),
            3,
            &HarnessConfig::new(1.0)?,
            &mut prompt,
            &mut out,
        )?
        .completed()
        .unwrap();

        assert_eq!(1, prompt.0);
        assert!(report.threshold_notice_fired);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(1, out.matches("is taking longer than the threshold").count());
        assert!(out.contains("first(3) is taking longer than the threshold (1ms)."));
        Ok(())
    }

    #[test]
    fn test_threshold_notice_rearms_per_invocation() -> Result<()> {
        let functions = vec![NamedFunction::new("slow", Sleepy(5))];
        let config = HarnessConfig::new(1.0)?;
        let mut prompt = CountingPrompt(0);
        let mut out: Vec<u8> = Vec::new();
        for _ in 0..2 {
            run_benchmarks(&functions, &FailureSet::new(), 1, &config, &mut prompt, &mut out)?;
        }
        assert_eq!(2, prompt.0);
        Ok(())
    }

    #[test]
    fn test_exit_at_threshold() -> Result<()> {
        let functions = vec![
            NamedFunction::new("first", Sleepy(5)),
            NamedFunction::new("second", Sleepy(0)),
        ];
        let mut out: Vec<u8> = Vec::new();
        let outcome = run_benchmarks(
            &functions,
            &FailureSet::new(),
            3,
            &HarnessConfig::new(1.0)?,
            &mut FixedAnswer(true),
            &mut out,
        )?;
        assert!(outcome.is_exited());
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("second(3)"));
        assert!(!out.contains("All functions have been benchmarked."));
        Ok(())
    }
}
