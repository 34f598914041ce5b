//
// report.rs
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

use crate::benchmark::{BenchmarkReport, Timing};
use crate::function::FailureSet;
use prettytable::{format, row, Table};

/// One row per benchmarked function, in the order they ran
pub fn summary_table(failures: &FailureSet, report: &BenchmarkReport) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["function", "result", "elapsed (ms)"]);
    for record in report.records.iter() {
        let result = if failures.contains(&record.name) {
            "failed"
        } else {
            "ok"
        };
        let elapsed = match record.timing {
            Timing::Timed(ms) => format!("{:.5}", ms),
            Timing::Skipped => "-".to_string(),
        };
        table.add_row(row![record.name, result, elapsed]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::BenchmarkRecord;

    #[test]
    fn test_summary_table() {
        let mut failures = FailureSet::new();
        failures.insert("broken");
        let report = BenchmarkReport {
            records: vec![
                BenchmarkRecord {
                    name: "fast".to_string(),
                    timing: Timing::Timed(0.25),
                },
                BenchmarkRecord {
                    name: "broken".to_string(),
                    timing: Timing::Skipped,
                },
            ],
            threshold_notice_fired: false,
        };
        let table = summary_table(&failures, &report);
        assert_eq!(2, table.len());
        let rendered = table.to_string();
        assert!(rendered.contains("0.25000"));
        assert!(rendered.contains("failed"));
        assert!(rendered.contains("broken"));
    }
}
