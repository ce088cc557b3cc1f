//! CPU scheduling simulator.
//!
//! Simulates classic single-CPU scheduling policies over a small set of
//! processes and produces an execution timeline (Gantt chart) plus
//! per-process and averaged timing metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `ScheduledProcess`,
//!   `GanttSegment`, `RunResult`, `Averages`, `Algorithm`
//! - **`scheduler`**: FCFS, SJF, SRTF, priority and round robin schedulers,
//!   the `Simulator` entry point and `RunKpi`
//! - **`validation`**: Input integrity checks (blank/duplicate IDs, zero bursts)
//! - **`config`**: JSON run descriptions
//! - **`report`**: Plain-text tables, Gantt labels and averages
//! - **`workload`**: Seeded random process lists
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::{Algorithm, ProcessRecord};
//! use cpu_sched::report;
//! use cpu_sched::scheduler::{RunParameters, Simulator};
//!
//! let processes = vec![ProcessRecord::new("P1", 0, 4), ProcessRecord::new("P2", 1, 3)];
//! let mut params = RunParameters::new().with_quantum(2);
//! let result = Simulator::run(Algorithm::RoundRobin, &processes, &mut params).unwrap();
//!
//! assert_eq!(report::render_gantt(&result), "P1 (0-2) | P2 (2-4) | P1 (4-6) | P2 (6-7)");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
