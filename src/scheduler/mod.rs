//! Scheduling engine, algorithm kernels and run metrics.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | no | arrival order |
//! | SJF | no | shortest burst among arrived |
//! | Priority | no | lowest priority value among arrived |
//! | Round Robin | yes | FIFO queue, fixed quantum |
//!
//! Ties in SJF and Priority go to the process that appears first in the
//! input. Every algorithm jumps the clock over idle gaps instead of
//! dispatching a process before it arrives.
//!
//! # Metrics
//!
//! `AggregateMetrics` averages waiting, turnaround and response time and
//! reports throughput as processes per tick.

mod algorithms;
mod engine;
mod kpi;
mod run;

pub use engine::SchedulingEngine;
pub use kpi::AggregateMetrics;
pub use run::{Algorithm, ScheduleRun};
