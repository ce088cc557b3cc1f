//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep input order).
//! 2. Walk the sorted list with a single clock; jump the clock forward
//!    when the CPU would otherwise sit idle.
//! 3. Run each process to completion, one Gantt segment per process.
//!
//! # Complexity
//! O(n log n)

use log::{debug, trace};

use super::state::RunState;
use super::CpuScheduler;
use crate::error::ScheduleError;
use crate::models::{Algorithm, ProcessRecord, RunResult};

/// First-Come-First-Served scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::ProcessRecord;
/// use cpu_sched::scheduler::{CpuScheduler, Fcfs};
///
/// let processes = vec![ProcessRecord::new("P1", 0, 5), ProcessRecord::new("P2", 1, 3)];
/// let result = Fcfs.schedule(&processes).unwrap();
/// assert_eq!(result.process("P2").unwrap().waiting_time, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, processes: &[ProcessRecord]) -> Result<RunResult, ScheduleError> {
        let mut state = RunState::new(processes);

        let mut order: Vec<usize> = (0..state.procs.len()).collect();
        order.sort_by_key(|&idx| state.procs[idx].arrival); // stable

        for idx in order {
            let arrival = state.procs[idx].arrival;
            if state.clock < arrival {
                trace!("cpu idle [{}, {})", state.clock, arrival);
                state.clock = arrival;
            }
            let burst = state.procs[idx].burst;
            let (start, end) = state.execute(idx, burst);
            debug!("FCFS: {} runs [{start}, {end})", state.procs[idx].id);
            state.gantt.push(&state.procs[idx].id, start, end);
        }

        Ok(state.into_result(Algorithm::Fcfs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttSegment;

    #[test]
    fn test_fcfs_basic() {
        let processes = vec![ProcessRecord::new("P1", 0, 5), ProcessRecord::new("P2", 1, 3)];
        let result = Fcfs.schedule(&processes).unwrap();

        assert_eq!(
            result.gantt,
            vec![GanttSegment::new("P1", 0, 5), GanttSegment::new("P2", 5, 8)]
        );
        let p1 = result.process("P1").unwrap();
        assert_eq!((p1.turnaround_time, p1.waiting_time), (5, 0));
        let p2 = result.process("P2").unwrap();
        assert_eq!((p2.turnaround_time, p2.waiting_time), (7, 4));

        let avg = result.averages.unwrap();
        assert!((avg.avg_turnaround - 6.0).abs() < 1e-10);
        assert!((avg.avg_waiting - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![
            ProcessRecord::new("late", 4, 1),
            ProcessRecord::new("early", 0, 2),
        ];
        let result = Fcfs.schedule(&processes).unwrap();
        assert_eq!(result.completion_order(), vec!["early", "late"]);
    }

    #[test]
    fn test_fcfs_stable_on_equal_arrival() {
        let processes = vec![
            ProcessRecord::new("B", 0, 4),
            ProcessRecord::new("A", 0, 1),
            ProcessRecord::new("C", 0, 2),
        ];
        let result = Fcfs.schedule(&processes).unwrap();
        assert_eq!(result.completion_order(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![ProcessRecord::new("P1", 0, 2), ProcessRecord::new("P2", 6, 3)];
        let result = Fcfs.schedule(&processes).unwrap();
        // Gap [2, 6) is not represented
        assert_eq!(
            result.gantt,
            vec![GanttSegment::new("P1", 0, 2), GanttSegment::new("P2", 6, 9)]
        );
        assert_eq!(result.process("P2").unwrap().waiting_time, 0);
    }

    #[test]
    fn test_fcfs_deterministic() {
        let processes = vec![
            ProcessRecord::new("P1", 3, 2),
            ProcessRecord::new("P2", 0, 4),
            ProcessRecord::new("P3", 3, 1),
        ];
        let first = Fcfs.schedule(&processes).unwrap();
        let second = Fcfs.schedule(&processes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fcfs_empty() {
        let result = Fcfs.schedule(&[]).unwrap();
        assert!(result.is_empty());
        assert!(result.gantt.is_empty());
        assert!(result.averages.is_none());
    }
}
