//! Round Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. A pass scans processes in input order.
//! 2. When the scan reaches a process with `remaining > 0` and
//!    `arrival <= clock`, it runs for `min(quantum, remaining)`; the clock
//!    advances and one Gantt segment is recorded. Segments are never
//!    coalesced, even when the same process runs back-to-back.
//! 3. A pass that dispatches nothing jumps the clock to the next arrival.
//! 4. Passes repeat until every process has completed.
//!
//! Readiness is checked when the scan reaches a process, so a process that
//! arrives mid-pass is picked up in the same pass only if it sits later in
//! the input than the scan position; otherwise it waits for the next pass.
//! This differs from a strict FIFO ready queue.

use log::debug;

use super::state::RunState;
use super::CpuScheduler;
use crate::error::ScheduleError;
use crate::models::{Algorithm, ProcessRecord, RunResult, Time};

/// Round Robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::ProcessRecord;
/// use cpu_sched::scheduler::{CpuScheduler, RoundRobin};
///
/// let processes = vec![ProcessRecord::new("P1", 0, 4), ProcessRecord::new("P2", 1, 3)];
/// let result = RoundRobin::new(2).unwrap().schedule(&processes).unwrap();
/// let labels: Vec<String> = result.gantt.iter().map(|s| s.to_string()).collect();
/// assert_eq!(labels, ["P1 (0-2)", "P2 (2-4)", "P1 (4-6)", "P2 (6-7)"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Time,
}

impl RoundRobin {
    /// Creates a scheduler with the given time quantum.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidQuantum`] if `quantum` is zero.
    pub fn new(quantum: Time) -> Result<Self, ScheduleError> {
        if quantum == 0 {
            return Err(ScheduleError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> Time {
        self.quantum
    }
}

impl CpuScheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn schedule(&self, processes: &[ProcessRecord]) -> Result<RunResult, ScheduleError> {
        let mut state = RunState::new(processes);
        let mut pass = 0usize;

        while !state.all_done() {
            pass += 1;
            let mut dispatched = false;

            for idx in 0..state.procs.len() {
                if !state.procs[idx].is_ready_at(state.clock) {
                    continue;
                }
                let slice = self.quantum.min(state.procs[idx].remaining);
                let (start, end) = state.execute(idx, slice);
                debug!("RR pass {pass}: {} runs [{start}, {end})", state.procs[idx].id);
                state.gantt.push(&state.procs[idx].id, start, end);
                dispatched = true;
            }

            if !dispatched && !state.skip_idle() {
                break;
            }
        }

        Ok(state.into_result(Algorithm::RoundRobin))
    }
}
