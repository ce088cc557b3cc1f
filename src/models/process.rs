//! Process models.
//!
//! A [`ProcessRecord`] is the immutable input supplied by the process store.
//! A [`ScheduledProcess`] is the per-run working copy that an algorithm
//! mutates while it simulates, and that ends up in the run result with its
//! timing metrics filled in.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::Time;

/// A process submitted for scheduling.
///
/// # Time Representation
/// Arrival and burst are integer ticks relative to the simulation epoch
/// (t=0). The consumer decides what a tick means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub id: String,
    /// Instant the process becomes ready to run.
    pub arrival: Time,
    /// Total CPU time required.
    pub burst: Time,
}

impl ProcessRecord {
    /// Creates a new process record.
    pub fn new(id: impl Into<String>, arrival: Time, burst: Time) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }
}

/// A process as tracked during and after one algorithm run.
///
/// Created from a [`ProcessRecord`] at the start of every run; the caller's
/// records are never touched. Metric fields are meaningful once
/// [`is_complete`](Self::is_complete) returns `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// Process identifier.
    pub id: String,
    /// Arrival time.
    pub arrival: Time,
    /// Burst time.
    pub burst: Time,
    /// Scheduling priority (lower = more urgent). Only set for priority runs.
    pub priority: Option<i64>,
    /// CPU time still owed to this process.
    pub remaining: Time,
    /// Instant of the first dispatch. `None` = never ran.
    pub start_time: Option<Time>,
    /// Instant the last unit of work finished.
    pub completion_time: Time,
    /// `completion_time - arrival`.
    pub turnaround_time: Time,
    /// `turnaround_time - burst`.
    pub waiting_time: Time,
}

impl ScheduledProcess {
    /// Creates the working copy of a record.
    pub fn from_record(record: &ProcessRecord) -> Self {
        Self {
            id: record.id.clone(),
            arrival: record.arrival,
            burst: record.burst,
            priority: None,
            remaining: record.burst,
            start_time: None,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether all work has been done.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the process can be dispatched at `clock`.
    #[inline]
    pub fn is_ready_at(&self, clock: Time) -> bool {
        self.remaining > 0 && self.arrival <= clock
    }

    /// Records completion at `clock` and derives turnaround and waiting time.
    ///
    /// `clock` must not precede `arrival + burst`; every correct schedule
    /// satisfies this.
    pub fn finish(&mut self, clock: Time) {
        debug_assert!(
            clock >= self.arrival + self.burst,
            "process {} finished at {clock} before arrival + burst",
            self.id
        );
        self.remaining = 0;
        self.completion_time = clock;
        self.turnaround_time = clock - self.arrival;
        self.waiting_time = self.turnaround_time - self.burst;
    }

    /// Time from arrival to first dispatch.
    pub fn response_time(&self) -> Option<Time> {
        self.start_time.map(|start| start - self.arrival)
    }
}

impl From<&ProcessRecord> for ScheduledProcess {
    fn from(record: &ProcessRecord) -> Self {
        Self::from_record(record)
    }
}
