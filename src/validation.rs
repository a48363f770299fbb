//! Input validation for simulation runs.
//!
//! Checks the process set and algorithm parameters before any simulation
//! work starts. Detects:
//! - Empty process sets (averages would divide by zero)
//! - Duplicate or zero pids
//! - Negative arrival times
//! - Non-positive burst times
//! - Process sets whose last possible completion does not fit the clock
//! - Non-positive Round-Robin quanta

use crate::models::ProcessSpec;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same pid.
    DuplicatePid,
    /// A pid is zero.
    InvalidPid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// Latest arrival plus total burst exceeds `i64::MAX` ticks.
    HorizonOverflow,
    /// A Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No pid is zero
/// 3. No duplicate pids
/// 4. No negative arrival times
/// 5. All burst times are positive
/// 6. `max(arrival) + sum(burst)` fits in `i64`, bounding every clock value
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                "Pid must be positive",
            ));
        }
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at {}", p.pid, p.arrival_time),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has burst time {}", p.pid, p.burst_time),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any completion time: latest arrival plus every burst.
///
/// Negative arrivals and non-positive bursts are skipped; they are reported
/// separately. Returns `None` on overflow.
fn horizon(processes: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time)
        .filter(|&a| a >= 0)
        .max()
        .unwrap_or(0);

    processes
        .iter()
        .map(|p| p.burst_time)
        .filter(|&b| b > 0)
        .try_fold(latest_arrival, i64::checked_add)
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        ));
    }
    Ok(())
}
