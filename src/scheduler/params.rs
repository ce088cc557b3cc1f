//! Run parameter collection.
//!
//! Priority and round robin runs need values that the process records do
//! not carry. A [`ParameterSource`] supplies them; the simulator queries it
//! once, before the simulation starts, so the algorithms themselves never
//! block on input.

use std::collections::HashMap;

use crate::models::{ProcessRecord, Time};

/// Supplies per-run parameters.
///
/// Implement this over whatever collects input (prompt, form, file).
/// Returning `None` means the value was not provided.
pub trait ParameterSource {
    /// Priority for one process (lower = more urgent).
    fn priority(&mut self, process: &ProcessRecord) -> Option<i64>;

    /// Time quantum for round robin.
    fn quantum(&mut self) -> Option<Time>;
}

/// In-memory parameter set.
///
/// # Example
///
/// ```
/// use cpu_sched::scheduler::{ParameterSource, RunParameters};
/// use cpu_sched::models::ProcessRecord;
///
/// let mut params = RunParameters::new().with_priority("P1", 2).with_quantum(4);
/// assert_eq!(params.priority(&ProcessRecord::new("P1", 0, 1)), Some(2));
/// assert_eq!(params.quantum(), Some(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunParameters {
    /// Priorities keyed by process ID.
    pub priorities: HashMap<String, i64>,
    /// Round robin time quantum.
    pub quantum: Option<Time>,
}

impl RunParameters {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority of a process.
    pub fn with_priority(mut self, process_id: impl Into<String>, priority: i64) -> Self {
        self.priorities.insert(process_id.into(), priority);
        self
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

impl ParameterSource for RunParameters {
    fn priority(&mut self, process: &ProcessRecord) -> Option<i64> {
        self.priorities.get(&process.id).copied()
    }

    fn quantum(&mut self) -> Option<Time> {
        self.quantum
    }
}
