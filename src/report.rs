//! Plain-text reporting.
//!
//! Formats process sets, metrics and timelines as tables. Every function
//! returns a `String`; printing is left to the caller.

use std::fmt::Write;

use crate::models::{ProcessSpec, Timeline};
use crate::scheduler::{AggregateMetrics, ScheduleRun};

/// Title-cases a snake_case metric name (`avg_waiting_time` → `Avg Waiting Time`).
pub fn metric_label(metric: &str) -> String {
    metric
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Input process table.
pub fn process_table(processes: &[ProcessSpec]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Test Processes:");
    let _ = writeln!(
        out,
        "{:<5} {:<15} {:<15} {:<10}",
        "PID", "Arrival Time", "Burst Time", "Priority"
    );
    let _ = writeln!(out, "{}", "-".repeat(50));
    for p in processes {
        let _ = writeln!(
            out,
            "{:<5} {:<15} {:<15} {:<10}",
            p.pid, p.arrival_time, p.burst_time, p.priority
        );
    }
    out
}

/// Metric block for one algorithm, two decimals per value.
pub fn metrics_block(name: &str, metrics: &AggregateMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Algorithm: {name}");
    let _ = writeln!(out, "{}", "-".repeat(30));
    for (metric, value) in metrics.entries() {
        let _ = writeln!(out, "{:<22}: {:.2}", metric_label(metric), value);
    }
    out
}

/// Results section covering every run, in the given order.
pub fn results_summary(runs: &[ScheduleRun]) -> String {
    let banner = "=".repeat(20);
    let mut out = format!("{banner} RESULTS {banner}\n");
    for run in runs {
        out.push('\n');
        out.push_str(&metrics_block(run.algorithm.name(), &run.metrics));
    }
    let _ = writeln!(out, "{}", "=".repeat(49));
    out
}

/// Per-process timing table of one run.
pub fn process_timings(run: &ScheduleRun) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", run.algorithm);
    let _ = writeln!(
        out,
        "{:<5} {:<8} {:<6} {:<6} {:<11} {:<11} {:<8} {:<9}",
        "PID", "Arrival", "Burst", "Start", "Completion", "Turnaround", "Waiting", "Response"
    );
    let _ = writeln!(out, "{}", "-".repeat(72));
    for p in &run.processes {
        let start = p
            .start_time
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<5} {:<8} {:<6} {:<6} {:<11} {:<11} {:<8} {:<9}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            start,
            p.completion_time,
            p.turnaround_time,
            p.waiting_time,
            p.response_time
        );
    }
    out
}

/// One-line Gantt rendering, e.g. `|0 P1 2|2 P2 4|4 idle 6|`.
pub fn gantt_line(timeline: &Timeline) -> String {
    let mut out = String::from("|");
    let mut clock = 0;
    for slice in &timeline.slices {
        if slice.start > clock {
            let _ = write!(out, "{} idle {}|", clock, slice.start);
        }
        let _ = write!(out, "{} P{} {}|", slice.start, slice.pid, slice.end);
        clock = slice.end;
    }
    out
}
