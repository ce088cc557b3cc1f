//! JSON run descriptions.
//!
//! A [`SimulationConfig`] bundles everything one run needs: the algorithm,
//! its parameters and the process list.
//!
//! ```json
//! {
//!   "algorithm": "round_robin",
//!   "quantum": 2,
//!   "processes": [
//!     { "id": "P1", "arrival": 0, "burst": 4 },
//!     { "id": "P2", "arrival": 1, "burst": 3, "priority": 1 }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ScheduleError;
use crate::models::{Algorithm, ProcessRecord, RunResult, Time};
use crate::scheduler::{RunParameters, Simulator};

/// One process entry in a run description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process identifier.
    pub id: String,
    /// Arrival time.
    pub arrival: Time,
    /// Burst time.
    pub burst: Time,
    /// Priority for priority scheduling (lower = more urgent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// A complete run description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// Time quantum for round robin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Time>,
    /// Processes in input order.
    #[serde(default)]
    pub processes: Vec<ProcessSpec>,
}

impl SimulationConfig {
    /// Creates a config with no processes.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: None,
            processes: Vec::new(),
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Appends a process.
    pub fn with_process(mut self, spec: ProcessSpec) -> Self {
        self.processes.push(spec);
        self
    }

    /// Parses a run description from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse simulation config")
    }

    /// Reads a run description from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read simulation config at {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("failed to load simulation config at {}", path.display()))
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize simulation config")
    }

    /// Process records in input order.
    pub fn records(&self) -> Vec<ProcessRecord> {
        self.processes
            .iter()
            .map(|p| ProcessRecord::new(p.id.clone(), p.arrival, p.burst))
            .collect()
    }

    /// Run parameters carried by this description.
    pub fn parameters(&self) -> RunParameters {
        RunParameters {
            priorities: self
                .processes
                .iter()
                .filter_map(|p| p.priority.map(|pr| (p.id.clone(), pr)))
                .collect(),
            quantum: self.quantum,
        }
    }

    /// Runs the described simulation.
    pub fn run(&self) -> std::result::Result<RunResult, ScheduleError> {
        Simulator::run(self.algorithm, &self.records(), &mut self.parameters())
    }
}

impl ProcessSpec {
    /// Creates a process entry without a priority.
    pub fn new(id: impl Into<String>, arrival: Time, burst: Time) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}
