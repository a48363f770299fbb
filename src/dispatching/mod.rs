//! Dispatching rules and ready-set extraction.
//!
//! The non-preemptive selection algorithms share one primitive: among the
//! processes that have arrived by the current time, pick the one with the
//! lowest rule score, skipping idle gaps when nothing is ready. The rule is
//! the only thing that differs between SJF and Priority scheduling.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, ReadySet};
//! use cpu_sched_sim::models::{ProcessRun, ProcessSpec};
//!
//! let runs: Vec<ProcessRun> = [ProcessSpec::new(1, 0, 8), ProcessSpec::new(2, 0, 3)]
//!     .iter()
//!     .map(ProcessRun::from)
//!     .collect();
//! let mut ready = ReadySet::new(runs.len());
//! let mut now = 0;
//! assert_eq!(ready.next(&runs, &rules::ShortestBurst, &mut now), Some(1));
//! ```

mod context;
mod ready;
pub mod rules;

pub use context::SchedulingContext;
pub use ready::ReadySet;

use crate::models::ProcessRun;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.** Equal scores are resolved by the
/// caller, which keeps original input order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process at the current scheduling context.
    fn evaluate(&self, process: &ProcessRun, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
