//! Scheduling algorithm identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The CPU scheduling algorithms this crate simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Non-preemptive priority scheduling.
    Priority,
    /// Round Robin with a fixed time quantum.
    RoundRobin,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::Priority => "PRIORITY",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Long name.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come-First-Served",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::Priority => "Priority Scheduling",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before it completes.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srtf | Algorithm::RoundRobin)
    }

    /// Whether the run needs one priority per process.
    pub fn needs_priorities(&self) -> bool {
        matches!(self, Algorithm::Priority)
    }

    /// Whether the run needs a time quantum.
    pub fn needs_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error returned when a string names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Algorithm::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Algorithm::Sjf),
            "srtf" | "srt" | "shortest_remaining_time_first" => Ok(Algorithm::Srtf),
            "priority" | "priority_scheduling" => Ok(Algorithm::Priority),
            "rr" | "round_robin" => Ok(Algorithm::RoundRobin),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("FCFS".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("rr".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!("Round Robin".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!(
            "shortest-remaining-time-first".parse::<Algorithm>(),
            Ok(Algorithm::Srtf)
        );
        assert!("lottery".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_flags() {
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::Priority.needs_priorities());
        assert!(Algorithm::RoundRobin.needs_quantum());
        assert!(!Algorithm::Fcfs.needs_quantum());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Algorithm::RoundRobin).unwrap();
        assert_eq!(json, "\"round_robin\"");
        let parsed: Algorithm = serde_json::from_str("\"srtf\"").unwrap();
        assert_eq!(parsed, Algorithm::Srtf);
    }
}
