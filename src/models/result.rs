//! Run result model.
//!
//! A run result is the complete output of one algorithm invocation: the
//! processes in completion order with their metrics, the Gantt timeline,
//! and the averaged metrics.

use serde::{Deserialize, Serialize};

use super::{Algorithm, GanttSegment, ScheduledProcess, Time};

/// Mean turnaround, waiting and response time of a run.
///
/// Values are unrounded; formatting to two decimals is a presentation
/// concern (see [`crate::report`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time (first dispatch - arrival).
    pub avg_response: f64,
}

impl Averages {
    /// Averages the metrics of completed processes.
    ///
    /// Returns `None` for an empty list, where the mean is undefined.
    pub fn calculate(completed: &[ScheduledProcess]) -> Option<Self> {
        if completed.is_empty() {
            return None;
        }
        let n = completed.len() as f64;
        // Summed as f64: per-process values fit in Time, their sum may not.
        let total_turnaround: f64 = completed.iter().map(|p| p.turnaround_time as f64).sum();
        let total_waiting: f64 = completed.iter().map(|p| p.waiting_time as f64).sum();
        let total_response: f64 = completed
            .iter()
            .filter_map(|p| p.response_time())
            .map(|t| t as f64)
            .sum();

        Some(Self {
            avg_turnaround: total_turnaround / n,
            avg_waiting: total_waiting / n,
            avg_response: total_response / n,
        })
    }
}

/// The output of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Processes in completion order, metrics filled in.
    pub completed: Vec<ScheduledProcess>,
    /// Execution timeline in chronological order.
    pub gantt: Vec<GanttSegment>,
    /// Averaged metrics. `None` when no process was scheduled.
    pub averages: Option<Averages>,
}

impl RunResult {
    /// Builds a result and computes its averages.
    pub fn new(
        algorithm: Algorithm,
        completed: Vec<ScheduledProcess>,
        gantt: Vec<GanttSegment>,
    ) -> Self {
        let averages = Averages::calculate(&completed);
        Self {
            algorithm,
            completed,
            gantt,
            averages,
        }
    }

    /// Result of running an algorithm over zero processes.
    pub fn empty(algorithm: Algorithm) -> Self {
        Self::new(algorithm, Vec::new(), Vec::new())
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Makespan: latest segment end.
    pub fn makespan(&self) -> Time {
        self.gantt.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> Time {
        self.gantt.iter().map(GanttSegment::duration).sum()
    }

    /// Finds a completed process by ID.
    pub fn process(&self, id: &str) -> Option<&ScheduledProcess> {
        self.completed.iter().find(|p| p.id == id)
    }

    /// Returns all segments of a given process.
    pub fn segments_for(&self, id: &str) -> Vec<&GanttSegment> {
        self.gantt.iter().filter(|s| s.process_id == id).collect()
    }

    /// IDs in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.completed.iter().map(|p| p.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessRecord;

    fn finished(id: &str, arrival: Time, burst: Time, start: Time, end: Time) -> ScheduledProcess {
        let mut p = ScheduledProcess::from(&ProcessRecord::new(id, arrival, burst));
        p.start_time = Some(start);
        p.finish(end);
        p
    }

    fn sample_result() -> RunResult {
        RunResult::new(
            Algorithm::Fcfs,
            vec![finished("P1", 0, 5, 0, 5), finished("P2", 1, 3, 5, 8)],
            vec![GanttSegment::new("P1", 0, 5), GanttSegment::new("P2", 5, 8)],
        )
    }

    #[test]
    fn test_averages() {
        let r = sample_result();
        let avg = r.averages.unwrap();
        assert!((avg.avg_turnaround - 6.0).abs() < 1e-10); // (5+7)/2
        assert!((avg.avg_waiting - 2.0).abs() < 1e-10); // (0+4)/2
        assert!((avg.avg_response - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_averages_large_times() {
        let big = Time::MAX / 2 + 1;
        let completed = vec![finished("A", 0, big, 0, big), finished("B", 0, big, 0, big)];
        let avg = Averages::calculate(&completed).unwrap();
        assert!((avg.avg_turnaround - big as f64).abs() / (big as f64) < 1e-12);
        assert_eq!(avg.avg_waiting, 0.0);
    }

    #[test]
    fn test_averages_empty() {
        assert!(Averages::calculate(&[]).is_none());
        let r = RunResult::empty(Algorithm::Sjf);
        assert!(r.is_empty());
        assert!(r.averages.is_none());
        assert_eq!(r.makespan(), 0);
    }

    #[test]
    fn test_queries() {
        let r = sample_result();
        assert_eq!(r.makespan(), 8);
        assert_eq!(r.busy_time(), 8);
        assert_eq!(r.process("P2").unwrap().waiting_time, 4);
        assert!(r.process("P9").is_none());
        assert_eq!(r.segments_for("P1").len(), 1);
        assert_eq!(r.completion_order(), vec!["P1", "P2"]);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(json["algorithm"], "fcfs");
        assert_eq!(json["gantt"][1]["process_id"], "P2");
        assert_eq!(json["completed"][1]["turnaround_time"], 7);
    }
}
