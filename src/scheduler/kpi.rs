//! Run quality metrics (KPIs).
//!
//! Computes CPU scheduling performance indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy Time | Sum of Gantt segment lengths |
//! | Idle Time | Makespan - busy time |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Completed processes per tick |
//! | Avg Turnaround / Waiting / Response | See [`Averages`] |
//! | Max Waiting | Longest single wait |
//! | Dispatches | Number of Gantt segments |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use crate::models::{Averages, RunResult, Time};

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct RunKpi {
    /// Latest completion time.
    pub makespan: Time,
    /// Time the CPU spent executing processes.
    pub busy_time: Time,
    /// Time the CPU sat idle before the makespan.
    pub idle_time: Time,
    /// Busy fraction of the makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per unit of time.
    pub throughput: f64,
    /// Averaged per-process metrics. `None` for an empty run.
    pub averages: Option<Averages>,
    /// Longest waiting time of any process.
    pub max_waiting: Time,
    /// Number of dispatches (Gantt segments).
    pub dispatches: usize,
}

impl RunKpi {
    /// Computes KPIs from a run result.
    pub fn calculate(result: &RunResult) -> Self {
        let makespan = result.makespan();
        let busy_time = result.busy_time();
        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                result.completed.len() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            averages: result.averages,
            max_waiting: result
                .completed
                .iter()
                .map(|p| p.waiting_time)
                .max()
                .unwrap_or(0),
            dispatches: result.gantt.len(),
        }
    }

    /// Number of times the CPU switched from one process to a different one.
    pub fn context_switches(result: &RunResult) -> usize {
        result
            .gantt
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count()
    }
}
