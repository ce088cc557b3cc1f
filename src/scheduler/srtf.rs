//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! 1. Ready set = processes with `remaining > 0` and `arrival <= clock`.
//! 2. If the ready set is empty, jump the clock to the next arrival.
//! 3. Otherwise pick the smallest remaining time (ties: input order).
//! 4. Run it until it completes or the next process arrives, whichever
//!    comes first, then select again.
//!
//! Between two arrivals the running process only gets shorter, so it keeps
//! winning the selection; stepping from event to event picks exactly what
//! a unit-by-unit simulation would. Consecutive slices of the same process
//! are coalesced into a single Gantt segment; a switch closes the open
//! segment at the current clock.
//!
//! # Complexity
//! O(n²): at most one selection per arrival or completion event.

use log::debug;

use super::state::RunState;
use super::CpuScheduler;
use crate::error::ScheduleError;
use crate::models::{Algorithm, ProcessRecord, RunResult};

/// Shortest Remaining Time First scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl CpuScheduler for Srtf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srtf
    }

    fn schedule(&self, processes: &[ProcessRecord]) -> Result<RunResult, ScheduleError> {
        let mut state = RunState::new(processes);

        while !state.all_done() {
            let Some(idx) = state.select_ready_by(|p| p.remaining) else {
                if !state.skip_idle() {
                    break;
                }
                continue;
            };

            let remaining = state.procs[idx].remaining;
            let slice = match state.next_arrival() {
                Some(next) => remaining.min(next - state.clock),
                None => remaining,
            };
            let (start, end) = state.execute(idx, slice);
            if !state.gantt.extend_or_push(&state.procs[idx].id, start, end) {
                debug!(
                    "SRTF: t={start} switch to {} (remaining {remaining})",
                    state.procs[idx].id
                );
            }
        }

        Ok(state.into_result(Algorithm::Srtf))
    }
}
