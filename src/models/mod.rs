//! CPU scheduling domain models.
//!
//! Provides the data types consumed and produced by the scheduling engine.
//!
//! # Lifecycle
//!
//! | Type | Owner | Mutability |
//! |------|-------|------------|
//! | `ProcessRecord` | Process store (caller) | Immutable input |
//! | `ScheduledProcess` | One algorithm run | Mutated during the run |
//! | `GanttSegment` | `RunResult` | Immutable output |
//! | `RunResult` | Caller | Immutable output |

mod algorithm;
mod gantt;
mod process;
mod result;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use gantt::{GanttChart, GanttSegment};
pub use process::{ProcessRecord, ScheduledProcess};
pub use result::{Averages, RunResult};

/// Simulation time in integer ticks.
pub type Time = u64;
