//! Random process-set generation.
//!
//! Produces reproducible test workloads: pids `1..=count`, with arrival,
//! burst and priority drawn uniformly from half-open ranges. The same seed
//! always yields the same set.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::ProcessSpec;

/// Workload generation parameters.
///
/// Ranges are half-open (`min..max`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of processes.
    pub count: u32,
    /// Arrival time range.
    pub arrival_min: i64,
    pub arrival_max: i64,
    /// Burst time range (min must be ≥ 1).
    pub burst_min: i64,
    pub burst_max: i64,
    /// Priority range.
    pub priority_min: i32,
    pub priority_max: i32,
    /// RNG seed.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 5,
            arrival_min: 0,
            arrival_max: 10,
            burst_min: 1,
            burst_max: 20,
            priority_min: 1,
            priority_max: 10,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration (5 processes, seed 42).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival_min = min;
        self.arrival_max = max;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_min = min;
        self.burst_max = max;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_min = min;
        self.priority_max = max;
        self
    }
}

/// Generates a process set from `config`.
///
/// Empty or inverted ranges collapse to their minimum.
///
/// # Example
/// ```
/// use cpu_sched_sim::generator::{generate_processes, GeneratorConfig};
///
/// let procs = generate_processes(&GeneratorConfig::new().with_count(3));
/// assert_eq!(procs.len(), 3);
/// assert_eq!(procs[2].pid, 3);
/// ```
pub fn generate_processes(config: &GeneratorConfig) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate_with_rng(config, &mut rng)
}

/// Generates a process set using a caller-supplied RNG.
pub fn generate_with_rng<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<ProcessSpec> {
    (1..=config.count)
        .map(|pid| {
            let arrival = sample_i64(rng, config.arrival_min, config.arrival_max);
            let burst = sample_i64(rng, config.burst_min, config.burst_max);
            let priority = if config.priority_max > config.priority_min {
                rng.random_range(config.priority_min..config.priority_max)
            } else {
                config.priority_min
            };
            ProcessSpec::new(pid, arrival, burst).with_priority(priority)
        })
        .collect()
}

fn sample_i64<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
