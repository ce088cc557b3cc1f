//! Per-run simulation state shared by every algorithm.
//!
//! Holds the run's own copy of the processes, the clock, the Gantt chart
//! under construction and the completion order. Indices into `procs` are
//! original input positions, so "lowest index" is the input-order
//! tie-breaker used throughout the engine.

use log::trace;

use crate::models::{Algorithm, GanttChart, ProcessRecord, RunResult, ScheduledProcess, Time};

#[derive(Debug)]
pub(crate) struct RunState {
    pub(crate) procs: Vec<ScheduledProcess>,
    pub(crate) clock: Time,
    pub(crate) gantt: GanttChart,
    finished: Vec<usize>,
}

impl RunState {
    /// Copies the records into fresh working state at t=0.
    pub(crate) fn new(records: &[ProcessRecord]) -> Self {
        Self {
            procs: records.iter().map(ScheduledProcess::from_record).collect(),
            clock: 0,
            gantt: GanttChart::new(),
            finished: Vec::with_capacity(records.len()),
        }
    }

    /// Whether every process of this run has completed.
    #[inline]
    pub(crate) fn all_done(&self) -> bool {
        self.finished.len() == self.procs.len()
    }

    /// Index of the ready process with the smallest key.
    ///
    /// Ties go to the lowest input index.
    pub(crate) fn select_ready_by<K, F>(&self, key: F) -> Option<usize>
    where
        K: Ord,
        F: Fn(&ScheduledProcess) -> K,
    {
        self.procs
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready_at(self.clock))
            .min_by_key(|(_, p)| key(*p))
            .map(|(idx, _)| idx)
    }

    /// Earliest arrival strictly after the current clock among unfinished processes.
    pub(crate) fn next_arrival(&self) -> Option<Time> {
        self.procs
            .iter()
            .filter(|p| !p.is_complete() && p.arrival > self.clock)
            .map(|p| p.arrival)
            .min()
    }

    /// Moves the clock across an idle gap to the next arrival.
    ///
    /// Returns `false` when nothing is left to arrive.
    pub(crate) fn skip_idle(&mut self) -> bool {
        match self.next_arrival() {
            Some(next) => {
                trace!("cpu idle [{}, {})", self.clock, next);
                self.clock = next;
                true
            }
            None => false,
        }
    }

    /// Runs process `idx` for `duration` ticks starting at the current clock.
    ///
    /// Updates remaining work and the first-dispatch instant, finalizes
    /// metrics on completion, and returns the `(start, end)` interval.
    /// Recording the interval in the Gantt chart is left to the caller.
    /// Validated input keeps `end` within [`Time`].
    pub(crate) fn execute(&mut self, idx: usize, duration: Time) -> (Time, Time) {
        let start = self.clock;
        let end = start + duration;
        let p = &mut self.procs[idx];
        debug_assert!(duration <= p.remaining);

        p.start_time.get_or_insert(start);
        p.remaining -= duration;
        self.clock = end;

        if p.remaining == 0 {
            p.finish(end);
            self.finished.push(idx);
        }
        (start, end)
    }

    /// Consumes the state into a result with processes in completion order.
    pub(crate) fn into_result(self, algorithm: Algorithm) -> RunResult {
        let mut slots: Vec<Option<ScheduledProcess>> = self.procs.into_iter().map(Some).collect();
        let completed = self
            .finished
            .iter()
            .filter_map(|&idx| slots[idx].take())
            .collect();
        RunResult::new(algorithm, completed, self.gantt.into_segments())
    }
}
