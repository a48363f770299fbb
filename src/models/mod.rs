//! Simulation domain models.
//!
//! Provides the input process description, the per-run working copy that
//! algorithms mutate, and the execution timeline they record.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Immutable input (pid, arrival, burst, priority) |
//! | `ProcessRun` | Per-run copy with start/completion and derived metrics |
//! | `ExecutionSlice` | One contiguous CPU interval |
//! | `Timeline` | Dispatch-ordered slices of a run |

mod process;
mod timeline;

pub use process::{ProcessRun, ProcessSpec};
pub use timeline::{ExecutionSlice, Timeline};
