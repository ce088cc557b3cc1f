//! Non-preemptive priority scheduling.
//!
//! Same greedy loop as SJF, keyed on an externally supplied integer
//! priority instead of burst time. **Lower value = higher priority.**
//! Equal priorities are resolved by input order.

use std::collections::HashMap;

use super::sjf::run_non_preemptive;
use super::state::RunState;
use super::CpuScheduler;
use crate::error::ScheduleError;
use crate::models::{Algorithm, ProcessRecord, RunResult};

/// Priority scheduler.
///
/// Priorities are fixed before the run and keyed by process ID.
///
/// # Example
///
/// ```
/// use cpu_sched::models::ProcessRecord;
/// use cpu_sched::scheduler::{CpuScheduler, PriorityScheduling};
///
/// let processes = vec![ProcessRecord::new("P1", 0, 2), ProcessRecord::new("P2", 0, 2)];
/// let scheduler = PriorityScheduling::new()
///     .with_priority("P1", 5)
///     .with_priority("P2", 1);
/// let result = scheduler.schedule(&processes).unwrap();
/// assert_eq!(result.completion_order(), vec!["P2", "P1"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityScheduling {
    priorities: HashMap<String, i64>,
}

impl PriorityScheduling {
    /// Creates a scheduler with no priorities assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a priority to a process.
    pub fn with_priority(mut self, process_id: impl Into<String>, priority: i64) -> Self {
        self.priorities.insert(process_id.into(), priority);
        self
    }

    /// Priority assigned to a process, if any.
    pub fn priority_of(&self, process_id: &str) -> Option<i64> {
        self.priorities.get(process_id).copied()
    }
}

impl FromIterator<(String, i64)> for PriorityScheduling {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            priorities: iter.into_iter().collect(),
        }
    }
}

impl CpuScheduler for PriorityScheduling {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn schedule(&self, processes: &[ProcessRecord]) -> Result<RunResult, ScheduleError> {
        let mut state = RunState::new(processes);
        for p in &mut state.procs {
            let priority = self
                .priority_of(&p.id)
                .ok_or_else(|| ScheduleError::MissingPriority {
                    process_id: p.id.clone(),
                })?;
            p.priority = Some(priority);
        }

        // Every process has a priority at this point.
        Ok(run_non_preemptive(state, Algorithm::Priority, |p| {
            p.priority.unwrap_or(i64::MAX)
        }))
    }
}
