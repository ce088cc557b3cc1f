//! CPU scheduling algorithms and run evaluation.
//!
//! Five classic single-CPU policies, each a pure function from a process
//! list to a [`RunResult`](crate::models::RunResult).
//!
//! # Algorithms
//!
//! | Scheduler | Preemptive | Selection key | Gantt segments |
//! |-----------|-----------|---------------|----------------|
//! | [`Fcfs`] | No | Arrival | One per process |
//! | [`Sjf`] | No | Burst | One per process |
//! | [`Srtf`] | Yes | Remaining time | Coalesced runs |
//! | [`PriorityScheduling`] | No | Priority (lower first) | One per process |
//! | [`RoundRobin`] | Yes | Input order, fixed quantum | One per dispatch |
//!
//! Ties are broken by original input order in every algorithm. Each run
//! works on its own copy of the input; the caller's records are never
//! modified.
//!
//! # KPI
//!
//! [`RunKpi`] computes makespan, utilization, throughput and averaged
//! turnaround/waiting/response times.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod params;
mod priority;
mod round_robin;
mod simulator;
mod sjf;
mod srtf;
mod state;

pub use fcfs::Fcfs;
pub use kpi::RunKpi;
pub use params::{ParameterSource, RunParameters};
pub use priority::PriorityScheduling;
pub use round_robin::RoundRobin;
pub use simulator::Simulator;
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::error::ScheduleError;
use crate::models::{Algorithm, ProcessRecord, RunResult};
use std::fmt::Debug;

/// A CPU scheduling policy.
///
/// Implementations take the process list by reference, copy it into
/// per-run state, and return the finished run. An empty process list
/// yields an empty result, not an error.
pub trait CpuScheduler: Debug {
    /// Which algorithm this is.
    fn algorithm(&self) -> Algorithm;

    /// Simulates the policy over `processes`.
    ///
    /// Input is assumed valid (see [`crate::validation`]).
    fn schedule(&self, processes: &[ProcessRecord]) -> Result<RunResult, ScheduleError>;

    /// Algorithm short name (e.g., "SRTF").
    fn name(&self) -> &'static str {
        self.algorithm().name()
    }
}
