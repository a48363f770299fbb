//! Ready-set extraction over a partially arrived process set.

use log::trace;

use super::{DispatchingRule, SchedulingContext};
use crate::models::ProcessRun;

/// Not-yet-dispatched processes of a non-preemptive run.
///
/// Holds indices into the run's process slice, kept in original input order
/// so that equal rule scores resolve to the earliest input position.
#[derive(Debug, Clone)]
pub struct ReadySet {
    remaining: Vec<usize>,
}

impl ReadySet {
    /// Creates a set holding every index in `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            remaining: (0..len).collect(),
        }
    }

    /// Removes and returns the next process to dispatch.
    ///
    /// Considers only processes with `arrival_time <= *current_time`. When
    /// none has arrived, `current_time` jumps to the earliest remaining
    /// arrival before selecting. Returns `None` once the set is empty.
    pub fn next(
        &mut self,
        processes: &[ProcessRun],
        rule: &dyn DispatchingRule,
        current_time: &mut i64,
    ) -> Option<usize> {
        let earliest = self
            .remaining
            .iter()
            .map(|&i| processes[i].arrival_time)
            .min()?;

        if earliest > *current_time {
            trace!("cpu idle from {} to {}", current_time, earliest);
            *current_time = earliest;
        }

        let now = *current_time;
        let context = SchedulingContext::at_time(now);

        // min_by_key returns the first of equal minima
        let (pos, _) = self
            .remaining
            .iter()
            .enumerate()
            .filter(|&(_, &i)| processes[i].is_ready_at(now))
            .min_by_key(|&(_, &i)| rule.evaluate(&processes[i], &context))?;

        Some(self.remaining.remove(pos))
    }

    /// Number of processes not yet dispatched.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether every process has been dispatched.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
