//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Ready set = unfinished processes with `arrival <= clock`.
//! 2. If the ready set is empty, jump the clock to the next arrival.
//! 3. Otherwise pick the smallest burst (ties: input order) and run it
//!    to completion.
//! 4. Repeat until every process has completed.
//!
//! The same greedy loop drives priority scheduling with a different key.
//!
//! # Complexity
//! O(n²)

use log::debug;

use super::state::RunState;
use super::CpuScheduler;
use crate::error::ScheduleError;
use crate::models::{Algorithm, ProcessRecord, RunResult, ScheduledProcess};

/// Shortest Job First scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl CpuScheduler for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&self, processes: &[ProcessRecord]) -> Result<RunResult, ScheduleError> {
        let state = RunState::new(processes);
        Ok(run_non_preemptive(state, Algorithm::Sjf, |p| p.burst))
    }
}

/// Greedy non-preemptive loop: repeatedly run the ready process with the
/// smallest `key` to completion.
pub(super) fn run_non_preemptive<K, F>(mut state: RunState, algorithm: Algorithm, key: F) -> RunResult
where
    K: Ord,
    F: Fn(&ScheduledProcess) -> K,
{
    while !state.all_done() {
        let Some(idx) = state.select_ready_by(&key) else {
            if !state.skip_idle() {
                break;
            }
            continue;
        };

        let burst = state.procs[idx].burst;
        let (start, end) = state.execute(idx, burst);
        debug!("{}: {} runs [{start}, {end})", algorithm.name(), state.procs[idx].id);
        state.gantt.push(&state.procs[idx].id, start, end);
    }

    state.into_result(algorithm)
}
