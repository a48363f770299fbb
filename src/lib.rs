//! Single-CPU scheduling simulator.
//!
//! Runs classical scheduling algorithms over a fixed, fully known process
//! set and derives comparative performance metrics.
//!
//! # Modules
//!
//! - **`models`**: `ProcessSpec`, `ProcessRun`, `ExecutionSlice`, `Timeline`
//! - **`dispatching`**: Selection rules and the shared ready-set primitive
//! - **`scheduler`**: `SchedulingEngine` (FCFS, SJF, Priority, Round-Robin)
//!   and `AggregateMetrics`
//! - **`validation`**: Input checks (empty sets, duplicate pids, bursts, quanta)
//! - **`generator`**: Seeded random process sets
//! - **`report`**: Plain-text tables and Gantt lines
//!
//! # Model
//!
//! One CPU, no context-switch cost, no I/O. Every process is known up front;
//! arrival times only delay when a process becomes eligible.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod generator;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
