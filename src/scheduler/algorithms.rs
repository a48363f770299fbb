//! Scheduling algorithm kernels.
//!
//! Each kernel takes a pristine working set, assigns `start_time` and
//! `completion_time` to every process, and returns the timeline it
//! dispatched. Metric derivation happens afterwards in the engine.
//!
//! # Complexity
//! - FCFS: O(n log n) for the sort, O(n) thereafter.
//! - Rule-driven (SJF, Priority): O(n²) ready-set rescans.
//! - Round-Robin: O(n log n + total_burst / quantum).

use std::collections::VecDeque;

use log::trace;

use crate::dispatching::{DispatchingRule, ReadySet};
use crate::models::{ExecutionSlice, ProcessRun, Timeline};

/// First-Come-First-Served.
///
/// Dispatches in ascending arrival order; equal arrivals keep input order.
pub(crate) fn fcfs(processes: &mut [ProcessRun]) -> Timeline {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    // sort_by_key is stable
    order.sort_by_key(|&i| processes[i].arrival_time);

    let mut timeline = Timeline::new();
    let mut current_time: i64 = 0;

    for idx in order {
        let process = &mut processes[idx];
        if current_time < process.arrival_time {
            current_time = process.arrival_time;
        }
        run_to_completion(process, &mut current_time, &mut timeline);
    }

    timeline
}

/// Non-preemptive selection by a dispatching rule.
///
/// Repeatedly picks the lowest-scoring arrived process and runs it to
/// completion. SJF and Priority scheduling differ only in `rule`.
pub(crate) fn by_rule(processes: &mut [ProcessRun], rule: &dyn DispatchingRule) -> Timeline {
    let mut ready = ReadySet::new(processes.len());
    let mut timeline = Timeline::new();
    let mut current_time: i64 = 0;

    while let Some(idx) = ready.next(processes, rule, &mut current_time) {
        run_to_completion(&mut processes[idx], &mut current_time, &mut timeline);
    }

    timeline
}

/// Round-Robin with a fixed time quantum.
///
/// `quantum` must be positive; callers validate it before dispatching here.
/// Processes that arrive by the end of a slice are queued ahead of the
/// process that was just preempted.
pub(crate) fn round_robin(processes: &mut [ProcessRun], quantum: i64) -> Timeline {
    let mut arrivals: Vec<usize> = (0..processes.len()).collect();
    arrivals.sort_by_key(|&i| processes[i].arrival_time);

    // Indexed by position, not pid, so distinct processes never share an entry.
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut cursor = 0;
    let mut timeline = Timeline::new();
    let mut current_time: i64 = 0;

    loop {
        admit_arrivals(processes, &arrivals, &mut cursor, current_time, &mut queue);

        let Some(idx) = queue.pop_front() else {
            match arrivals.get(cursor) {
                Some(&next) => {
                    trace!(
                        "cpu idle from {} to {}",
                        current_time,
                        processes[next].arrival_time
                    );
                    current_time = processes[next].arrival_time;
                    continue;
                }
                None => break,
            }
        };

        processes[idx].mark_started(current_time);

        let slice = quantum.min(remaining[idx]);
        let start = current_time;
        current_time += slice;
        remaining[idx] -= slice;
        timeline.push(ExecutionSlice::new(processes[idx].pid, start, current_time));
        trace!(
            "pid {} ran {}..{}, {} left",
            processes[idx].pid,
            start,
            current_time,
            remaining[idx]
        );

        admit_arrivals(processes, &arrivals, &mut cursor, current_time, &mut queue);

        if remaining[idx] > 0 {
            queue.push_back(idx);
        } else {
            processes[idx].completion_time = current_time;
        }
    }

    timeline
}

/// Enqueues every not-yet-admitted process with `arrival_time <= now`.
fn admit_arrivals(
    processes: &[ProcessRun],
    arrivals: &[usize],
    cursor: &mut usize,
    now: i64,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&idx) = arrivals.get(*cursor) {
        if !processes[idx].is_ready_at(now) {
            break;
        }
        queue.push_back(idx);
        *cursor += 1;
    }
}

/// Dispatches `process` at `current_time` and runs its whole burst.
fn run_to_completion(process: &mut ProcessRun, current_time: &mut i64, timeline: &mut Timeline) {
    process.mark_started(*current_time);
    let start = *current_time;
    *current_time += process.burst_time;
    process.completion_time = *current_time;
    timeline.push(ExecutionSlice::new(process.pid, start, *current_time));
    trace!("pid {} ran {}..{}", process.pid, start, current_time);
}
