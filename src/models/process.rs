//! Process model.
//!
//! A process is described once by an immutable [`ProcessSpec`] and copied
//! into a fresh [`ProcessRun`] for every algorithm invocation. The run copy
//! carries the scheduler's outputs (start and completion time) and the
//! per-process metrics derived from them.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Immutable description of a process to be scheduled.
///
/// # Example
/// ```
/// use cpu_sched_sim::models::ProcessSpec;
///
/// let p = ProcessSpec::new(1, 0, 5).with_priority(2);
/// assert_eq!(p.burst_time, 5);
/// assert_eq!(p.priority, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier (positive).
    pub pid: u32,
    /// Tick at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process with priority 0.
    pub fn new(pid: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Working copy of a process for a single algorithm run.
///
/// `start_time` is `None` until the first dispatch and is never changed
/// afterwards, so response time stays correct under preemption.
/// The derived fields are zero until [`ProcessRun::finalize`] runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRun {
    /// Unique process identifier.
    pub pid: u32,
    /// Tick at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent).
    pub priority: i32,
    /// First tick the process held the CPU.
    pub start_time: Option<i64>,
    /// Tick at which the last burst tick finished (0 until complete).
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `start_time - arrival_time`.
    pub response_time: i64,
}

impl From<&ProcessSpec> for ProcessRun {
    fn from(spec: &ProcessSpec) -> Self {
        Self {
            pid: spec.pid,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            priority: spec.priority,
            start_time: None,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: 0,
        }
    }
}

impl ProcessRun {
    /// Records the first dispatch. Later calls are ignored.
    #[inline]
    pub fn mark_started(&mut self, time: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn is_ready_at(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Fills in turnaround, waiting and response time.
    ///
    /// Assumes the process has been scheduled; an unset start time is
    /// treated as a dispatch at arrival.
    pub fn finalize(&mut self) {
        let start = self.start_time.unwrap_or(self.arrival_time);
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        self.response_time = start - self.arrival_time;
    }
}
