//! Scheduling engine.
//!
//! Holds the validated baseline process set and runs one algorithm per
//! invocation against a fresh working copy of it.

use log::{debug, info};

use super::algorithms;
use super::{AggregateMetrics, Algorithm, ScheduleRun};
use crate::dispatching::rules;
use crate::models::{ProcessRun, ProcessSpec};
use crate::validation::{validate_processes, validate_quantum, ValidationError};

/// Single-CPU scheduling engine.
///
/// Every entry point takes `&self` and works on its own copy of the
/// baseline, so calls may be repeated in any order (and from several
/// threads) with identical results.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessSpec;
/// use cpu_sched_sim::scheduler::SchedulingEngine;
///
/// let engine = SchedulingEngine::new(vec![
///     ProcessSpec::new(1, 0, 5),
///     ProcessSpec::new(2, 2, 3),
/// ])
/// .unwrap();
///
/// let fcfs = engine.fcfs();
/// assert!((fcfs.avg_waiting_time - 1.5).abs() < 1e-10);
///
/// let rr = engine.round_robin(2).unwrap();
/// assert!(rr.throughput > 0.0);
/// assert!(engine.round_robin(0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SchedulingEngine {
    processes: Vec<ProcessSpec>,
}

impl SchedulingEngine {
    /// Creates an engine over a validated process set.
    ///
    /// Rejects empty sets, duplicate or zero pids, negative arrivals and
    /// non-positive bursts, reporting every problem found.
    pub fn new(processes: Vec<ProcessSpec>) -> Result<Self, Vec<ValidationError>> {
        validate_processes(&processes)?;
        debug!("engine created with {} processes", processes.len());
        Ok(Self { processes })
    }

    /// The baseline process set, in input order.
    pub fn processes(&self) -> &[ProcessSpec] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always false; an engine never holds an empty set.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Runs First-Come-First-Served.
    pub fn fcfs(&self) -> AggregateMetrics {
        self.execute(Algorithm::Fcfs).metrics
    }

    /// Runs non-preemptive Shortest-Job-First.
    ///
    /// Equal bursts are dispatched in original input order.
    pub fn sjf(&self) -> AggregateMetrics {
        self.execute(Algorithm::Sjf).metrics
    }

    /// Runs non-preemptive Priority scheduling (lower value first).
    ///
    /// Equal priorities are dispatched in original input order.
    pub fn priority(&self) -> AggregateMetrics {
        self.execute(Algorithm::Priority).metrics
    }

    /// Runs Round-Robin with the given quantum.
    ///
    /// Fails with `NonPositiveQuantum` before simulating if `quantum <= 0`.
    pub fn round_robin(&self, quantum: i64) -> Result<AggregateMetrics, ValidationError> {
        self.run(Algorithm::RoundRobin { quantum }).map(|run| run.metrics)
    }

    /// Runs one algorithm and returns its full result.
    pub fn run(&self, algorithm: Algorithm) -> Result<ScheduleRun, ValidationError> {
        if let Algorithm::RoundRobin { quantum } = algorithm {
            validate_quantum(quantum)?;
        }
        Ok(self.execute(algorithm))
    }

    /// Runs each algorithm in order against the same baseline.
    ///
    /// Parameters are validated up front; nothing runs if any is invalid.
    pub fn compare(&self, set: &[Algorithm]) -> Result<Vec<ScheduleRun>, ValidationError> {
        for algorithm in set {
            if let Algorithm::RoundRobin { quantum } = algorithm {
                validate_quantum(*quantum)?;
            }
        }
        Ok(set.iter().map(|&a| self.execute(a)).collect())
    }

    /// Fresh working copy of the baseline.
    fn fresh_runs(&self) -> Vec<ProcessRun> {
        self.processes.iter().map(ProcessRun::from).collect()
    }

    fn execute(&self, algorithm: Algorithm) -> ScheduleRun {
        let mut processes = self.fresh_runs();
        debug!("running {} over {} processes", algorithm, processes.len());

        let timeline = match algorithm {
            Algorithm::Fcfs => algorithms::fcfs(&mut processes),
            Algorithm::Sjf => algorithms::by_rule(&mut processes, &rules::ShortestBurst),
            Algorithm::Priority => algorithms::by_rule(&mut processes, &rules::HighestPriority),
            Algorithm::RoundRobin { quantum } => algorithms::round_robin(&mut processes, quantum),
        };

        let metrics = AggregateMetrics::calculate(&mut processes);
        info!(
            "{} finished: makespan={} avg_wait={:.2} throughput={:.4}",
            algorithm,
            timeline.makespan(),
            metrics.avg_waiting_time,
            metrics.throughput
        );

        ScheduleRun {
            algorithm,
            processes,
            timeline,
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn all_algorithms() -> [Algorithm; 4] {
        Algorithm::comparison_set(2)
    }

    fn random_specs(rng: &mut StdRng, n: u32) -> Vec<ProcessSpec> {
        (1..=n)
            .map(|pid| {
                ProcessSpec::new(pid, rng.random_range(0..10), rng.random_range(1..20))
                    .with_priority(rng.random_range(1..10))
            })
            .collect()
    }

    #[test]
    fn test_fcfs_determinism() {
        let engine =
            SchedulingEngine::new(vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 2, 3)])
                .unwrap();
        let run = engine.run(Algorithm::Fcfs).unwrap();
        let p1 = run.process(1).unwrap();
        let p2 = run.process(2).unwrap();
        assert_eq!((p1.start_time, p1.completion_time), (Some(0), 5));
        assert_eq!((p2.start_time, p2.completion_time), (Some(5), 8));
        // P1 waits 0, P2 waits 5 - 2 = 3
        assert!((run.metrics.avg_waiting_time - 1.5).abs() < 1e-10);
        assert!((run.metrics.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_respects_arrival() {
        let engine =
            SchedulingEngine::new(vec![ProcessSpec::new(1, 0, 8), ProcessSpec::new(2, 1, 4)])
                .unwrap();
        let run = engine.run(Algorithm::Sjf).unwrap();
        assert_eq!(run.process(1).unwrap().start_time, Some(0));
        let p2 = run.process(2).unwrap();
        assert_eq!((p2.start_time, p2.completion_time), (Some(8), 12));
    }

    #[test]
    fn test_sjf_ties_by_input_order() {
        let engine =
            SchedulingEngine::new(vec![ProcessSpec::new(7, 0, 4), ProcessSpec::new(3, 0, 4)])
                .unwrap();
        let run = engine.run(Algorithm::Sjf).unwrap();
        assert_eq!(run.timeline.dispatch_order(), vec![7, 3]);
    }

    #[test]
    fn test_priority_ties_by_input_order() {
        let engine = SchedulingEngine::new(vec![
            ProcessSpec::new(1, 0, 3).with_priority(4),
            ProcessSpec::new(2, 0, 3).with_priority(2),
            ProcessSpec::new(3, 0, 3).with_priority(2),
        ])
        .unwrap();
        let run = engine.run(Algorithm::Priority).unwrap();
        assert_eq!(run.timeline.dispatch_order(), vec![2, 3, 1]);
    }

    #[test]
    fn test_round_robin_fairness() {
        let engine =
            SchedulingEngine::new(vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 0, 3)])
                .unwrap();
        let run = engine.run(Algorithm::RoundRobin { quantum: 2 }).unwrap();
        let slices: Vec<(u32, i64, i64)> = run
            .timeline
            .slices
            .iter()
            .map(|s| (s.pid, s.start, s.end))
            .collect();
        assert_eq!(
            slices,
            vec![(1, 0, 2), (2, 2, 4), (1, 4, 6), (2, 6, 7), (1, 7, 8)]
        );
        assert_eq!(run.process(1).unwrap().start_time, Some(0));
        assert_eq!(run.process(2).unwrap().start_time, Some(2));
        assert_eq!(run.process(2).unwrap().completion_time, 7);
        assert_eq!(run.process(1).unwrap().completion_time, 8);
    }

    #[test]
    fn test_idle_gap_every_algorithm() {
        let engine = SchedulingEngine::new(vec![ProcessSpec::new(1, 10, 5)]).unwrap();
        for algorithm in all_algorithms() {
            let run = engine.run(algorithm).unwrap();
            let p = run.process(1).unwrap();
            assert_eq!(p.start_time, Some(10), "{algorithm}");
            assert_eq!(p.completion_time, 15, "{algorithm}");
            assert_eq!(p.response_time, 0, "{algorithm}");
            assert_eq!(run.idle_time(), 10, "{algorithm}");
            assert!((run.cpu_utilization() - 5.0 / 15.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_idempotence() {
        let mut rng = StdRng::seed_from_u64(42);
        let engine = SchedulingEngine::new(random_specs(&mut rng, 8)).unwrap();
        for algorithm in all_algorithms() {
            let first = engine.run(algorithm).unwrap();
            let second = engine.run(algorithm).unwrap();
            assert_eq!(first, second);
        }
        assert_eq!(engine.fcfs(), engine.fcfs());
        assert_eq!(engine.sjf(), engine.sjf());
        assert_eq!(engine.priority(), engine.priority());
        assert_eq!(engine.round_robin(3).unwrap(), engine.round_robin(3).unwrap());
    }

    #[test]
    fn test_baseline_untouched() {
        let specs = vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 2, 3)];
        let engine = SchedulingEngine::new(specs.clone()).unwrap();
        engine.round_robin(1).unwrap();
        engine.sjf();
        assert_eq!(engine.processes(), specs.as_slice());
    }

    #[test]
    fn test_conservation() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..=12 {
            let engine = SchedulingEngine::new(random_specs(&mut rng, n)).unwrap();
            for algorithm in all_algorithms() {
                let run = engine.run(algorithm).unwrap();
                let total_turnaround: i64 = run.processes.iter().map(|p| p.turnaround_time).sum();
                let total_span: i64 = run
                    .processes
                    .iter()
                    .map(|p| p.completion_time - p.arrival_time)
                    .sum();
                assert_eq!(total_turnaround, total_span);

                for p in &run.processes {
                    assert!(p.waiting_time >= 0, "{algorithm} pid {}", p.pid);
                    assert!(p.response_time >= 0, "{algorithm} pid {}", p.pid);
                    assert!(p.response_time <= p.waiting_time, "{algorithm} pid {}", p.pid);
                    assert_eq!(p.turnaround_time - p.burst_time, p.waiting_time);
                }

                // Single CPU: slices never overlap
                let mut slices = run.timeline.slices.clone();
                slices.sort_by_key(|s| s.start);
                for pair in slices.windows(2) {
                    assert!(pair[0].end <= pair[1].start, "{algorithm}");
                }
                let total_burst: i64 = run.processes.iter().map(|p| p.burst_time).sum();
                assert_eq!(run.timeline.busy_time(), total_burst);
            }
        }
    }

    #[test]
    fn test_throughput_all_arrive_at_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..=10u32 {
            let specs: Vec<ProcessSpec> = (1..=n)
                .map(|pid| ProcessSpec::new(pid, 0, rng.random_range(1..20)))
                .collect();
            let total: i64 = specs.iter().map(|p| p.burst_time).sum();
            let engine = SchedulingEngine::new(specs).unwrap();
            for algorithm in all_algorithms() {
                let run = engine.run(algorithm).unwrap();
                let expected = f64::from(n) / run.makespan() as f64;
                assert!((run.metrics.throughput - expected).abs() < 1e-10);
                // No idle time when everything is ready at t=0
                assert_eq!(run.makespan(), total);
            }
        }
    }

    #[test]
    fn test_compare_order_and_quantum_check() {
        let engine = SchedulingEngine::new(vec![ProcessSpec::new(1, 0, 5)]).unwrap();
        let runs = engine.compare(&Algorithm::comparison_set(4)).unwrap();
        let names: Vec<&str> = runs.iter().map(|r| r.algorithm.name()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "Round Robin", "Priority"]);

        let err = engine
            .compare(&[Algorithm::Fcfs, Algorithm::RoundRobin { quantum: 0 }])
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveQuantum);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let errors = SchedulingEngine::new(Vec::new()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);

        let errors =
            SchedulingEngine::new(vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(1, 1, 2)])
                .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid));

        let engine = SchedulingEngine::new(vec![ProcessSpec::new(1, 0, 5)]).unwrap();
        assert_eq!(
            engine.round_robin(-1).unwrap_err().kind,
            ValidationErrorKind::NonPositiveQuantum
        );
    }

    #[test]
    fn test_clock_overflow_rejected_before_running() {
        let errors = SchedulingEngine::new(vec![
            ProcessSpec::new(1, 0, i64::MAX),
            ProcessSpec::new(2, 0, 1),
        ])
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HorizonOverflow));

        let errors = SchedulingEngine::new(vec![ProcessSpec::new(1, i64::MAX, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);
    }

    #[test]
    fn test_runs_up_to_clock_limit() {
        let half = i64::MAX / 2;
        let engine =
            SchedulingEngine::new(vec![ProcessSpec::new(1, 0, half), ProcessSpec::new(2, 0, half)])
                .unwrap();
        for algorithm in Algorithm::comparison_set(half) {
            let run = engine.run(algorithm).unwrap();
            assert_eq!(run.makespan(), 2 * half, "{algorithm}");
            assert_eq!(run.process(2).unwrap().start_time, Some(half), "{algorithm}");
            assert!(run.metrics.avg_turnaround_time > 0.0, "{algorithm}");
        }
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchedulingEngine>();
    }
}
