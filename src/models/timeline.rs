//! Execution timeline model.
//!
//! A timeline is the ordered list of CPU slices an algorithm dispatched.
//! Non-preemptive algorithms produce one slice per process; Round-Robin
//! produces one slice per quantum.

use serde::{Deserialize, Serialize};

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that ran.
    pub pid: u32,
    /// First tick of the slice.
    pub start: i64,
    /// Tick at which the slice ended (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(pid: u32, start: i64, end: i64) -> Self {
        Self { pid, start, end }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Dispatch-ordered record of every CPU slice in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: ExecutionSlice) {
        self.slices.push(slice);
    }

    /// Latest slice end (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// Ticks in `[0, makespan)` with no process running.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Busy time over makespan. Returns 0.0 for an empty timeline.
    pub fn utilization(&self) -> f64 {
        let horizon = self.makespan();
        if horizon <= 0 {
            return 0.0;
        }
        self.busy_time() as f64 / horizon as f64
    }

    /// All slices of one process, in dispatch order.
    pub fn slices_for(&self, pid: u32) -> Vec<&ExecutionSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Order in which processes were dispatched (one entry per slice).
    pub fn dispatch_order(&self) -> Vec<u32> {
        self.slices.iter().map(|s| s.pid).collect()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice was recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
