//! Built-in dispatching rules.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `ShortestBurst` | burst time | SJF |
//! | `HighestPriority` | priority value | Priority |
//! | `FirstArrival` | arrival time | FCFS (selection form) |
//!
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessRun;

/// Shortest Job First.
///
/// Prioritizes the ready process with the smallest total burst.
/// Minimizes average waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessRun, _context: &SchedulingContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Priority scheduling.
///
/// Prioritizes the ready process with the smallest priority value
/// (lower value = more urgent).
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessRun, _context: &SchedulingContext) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value) First"
    }
}

/// First Come First Served.
///
/// Prioritizes the ready process that arrived earliest.
#[derive(Debug, Clone, Copy)]
pub struct FirstArrival;

impl DispatchingRule for FirstArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessRun, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn run(pid: u32, arrival: i64, burst: i64, priority: i32) -> ProcessRun {
        ProcessRun::from(&ProcessSpec::new(pid, arrival, burst).with_priority(priority))
    }

    #[test]
    fn test_shortest_burst_score() {
        let ctx = SchedulingContext::at_time(0);
        assert_eq!(ShortestBurst.evaluate(&run(1, 0, 7, 3), &ctx), 7);
    }

    #[test]
    fn test_highest_priority_score() {
        let ctx = SchedulingContext::at_time(0);
        assert_eq!(HighestPriority.evaluate(&run(1, 0, 7, -2), &ctx), -2);
    }

    #[test]
    fn test_first_arrival_score() {
        let ctx = SchedulingContext::at_time(10);
        assert_eq!(FirstArrival.evaluate(&run(1, 4, 7, 0), &ctx), 4);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(HighestPriority.name(), "PRIORITY");
        assert_eq!(FirstArrival.description(), "First Come First Served");
    }
}
