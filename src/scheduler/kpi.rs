//! Aggregate run metrics.
//!
//! Reduces a fully scheduled process set into the comparative metrics
//! reported per algorithm.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | Avg Response Time | mean(first dispatch - arrival) |
//! | Throughput | n / max(completion), 0 if that maximum is 0 |

use serde::{Deserialize, Serialize};

use crate::models::ProcessRun;

/// Performance indicators of a single algorithm run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Mean response time (ticks).
    pub avg_response_time: f64,
    /// Processes completed per tick over the whole run.
    pub throughput: f64,
}

impl AggregateMetrics {
    /// Finalizes every process and averages the derived fields.
    ///
    /// Every process must already carry its start and completion time.
    /// Returns all-zero metrics for an empty slice.
    pub fn calculate(processes: &mut [ProcessRun]) -> Self {
        if processes.is_empty() {
            return Self::default();
        }

        // Summed as f64: per-process values fit the clock, their totals may not
        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;
        let mut total_response: f64 = 0.0;
        let mut last_completion: i64 = 0;

        for p in processes.iter_mut() {
            p.finalize();
            total_waiting += p.waiting_time as f64;
            total_turnaround += p.turnaround_time as f64;
            total_response += p.response_time as f64;
            last_completion = last_completion.max(p.completion_time);
        }

        let n = processes.len() as f64;
        let throughput = if last_completion > 0 {
            n / last_completion as f64
        } else {
            0.0
        };

        Self {
            avg_waiting_time: total_waiting / n,
            avg_turnaround_time: total_turnaround / n,
            avg_response_time: total_response / n,
            throughput,
        }
    }

    /// Looks up a metric by its snake_case name.
    pub fn get(&self, metric: &str) -> Option<f64> {
        match metric {
            "avg_waiting_time" => Some(self.avg_waiting_time),
            "avg_turnaround_time" => Some(self.avg_turnaround_time),
            "avg_response_time" => Some(self.avg_response_time),
            "throughput" => Some(self.throughput),
            _ => None,
        }
    }

    /// Metric names paired with values, in reporting order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("avg_waiting_time", self.avg_waiting_time),
            ("avg_turnaround_time", self.avg_turnaround_time),
            ("avg_response_time", self.avg_response_time),
            ("throughput", self.throughput),
        ]
    }
}
