//! Algorithm selection and per-run results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AggregateMetrics;
use crate::models::{ProcessRun, Timeline};

/// A CPU scheduling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served (non-preemptive).
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Priority, lower value first (non-preemptive).
    Priority,
    /// Round-Robin with a fixed time quantum (preemptive).
    RoundRobin {
        /// Maximum ticks per dispatch.
        quantum: i64,
    },
}

impl Algorithm {
    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process may be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin { .. })
    }

    /// The four algorithms in comparison order: FCFS, SJF, Round Robin, Priority.
    pub fn comparison_set(quantum: i64) -> [Algorithm; 4] {
        [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::RoundRobin { quantum },
            Algorithm::Priority,
        ]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => write!(f, "{} (q={})", self.name(), quantum),
            _ => f.write_str(self.name()),
        }
    }
}

/// Complete result of one algorithm invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRun {
    /// Algorithm that produced this run.
    pub algorithm: Algorithm,
    /// Finished processes, in input order.
    pub processes: Vec<ProcessRun>,
    /// CPU slices in dispatch order.
    pub timeline: Timeline,
    /// Aggregate metrics of this run.
    pub metrics: AggregateMetrics,
}

impl ScheduleRun {
    /// Finished record of one process.
    pub fn process(&self, pid: u32) -> Option<&ProcessRun> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Latest completion time.
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Ticks the CPU spent idle before the makespan.
    pub fn idle_time(&self) -> i64 {
        self.timeline.idle_time()
    }

    /// Fraction of the makespan the CPU was busy.
    pub fn cpu_utilization(&self) -> f64 {
        self.timeline.utilization()
    }
}
