//! Simulation entry point.
//!
//! # Flow
//!
//! 1. Validate the process list.
//! 2. Collect every run parameter from the [`ParameterSource`].
//! 3. Run the selected algorithm over its own copy of the input.
//!
//! Steps 1 and 2 finish before step 3 starts, so a rejected run leaves no
//! partial output and parameter collection never interleaves with
//! simulation steps.

use log::debug;

use super::{
    CpuScheduler, Fcfs, ParameterSource, PriorityScheduling, RoundRobin, RunParameters, Sjf, Srtf,
};
use crate::error::ScheduleError;
use crate::models::{Algorithm, ProcessRecord, RunResult, Time};
use crate::validation::validate_processes;

/// Validates input, gathers parameters and runs an algorithm.
///
/// # Example
///
/// ```
/// use cpu_sched::models::{Algorithm, ProcessRecord};
/// use cpu_sched::scheduler::{RunParameters, Simulator};
///
/// let processes = vec![ProcessRecord::new("P1", 0, 5), ProcessRecord::new("P2", 1, 3)];
/// let mut params = RunParameters::new();
/// let result = Simulator::run(Algorithm::Fcfs, &processes, &mut params).unwrap();
///
/// let avg = result.averages.unwrap();
/// assert!((avg.avg_turnaround - 6.0).abs() < 1e-10);
/// assert!((avg.avg_waiting - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Runs one algorithm.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidInput`] if validation fails.
    /// - [`ScheduleError::MissingPriority`] if a priority run lacks a value.
    /// - [`ScheduleError::MissingQuantum`] / [`ScheduleError::InvalidQuantum`]
    ///   if a round robin run lacks a positive quantum.
    pub fn run(
        algorithm: Algorithm,
        processes: &[ProcessRecord],
        params: &mut dyn ParameterSource,
    ) -> Result<RunResult, ScheduleError> {
        validate_processes(processes)?;
        Self::run_validated(algorithm, processes, params)
    }

    /// Runs every algorithm over the same input, in [`Algorithm::ALL`] order.
    ///
    /// The input is validated and parameters are collected once up front,
    /// then reused by every run.
    pub fn run_all(
        processes: &[ProcessRecord],
        params: &mut dyn ParameterSource,
    ) -> Result<Vec<(Algorithm, RunResult)>, ScheduleError> {
        validate_processes(processes)?;
        let mut collected = Self::collect(processes, params);

        let mut results = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            let result = Self::run_validated(algorithm, processes, &mut collected)?;
            results.push((algorithm, result));
        }
        Ok(results)
    }

    /// Builds and runs `algorithm` over input that already passed validation.
    fn run_validated(
        algorithm: Algorithm,
        processes: &[ProcessRecord],
        params: &mut dyn ParameterSource,
    ) -> Result<RunResult, ScheduleError> {
        let scheduler = Self::build(algorithm, processes, params)?;

        debug!(
            "running {} over {} processes",
            algorithm.name(),
            processes.len()
        );
        let result = scheduler.schedule(processes)?;
        debug!(
            "{} finished: makespan {}, {} segments",
            algorithm.name(),
            result.makespan(),
            result.gantt.len()
        );
        Ok(result)
    }

    /// Builds the scheduler for `algorithm`, pulling its parameters.
    fn build(
        algorithm: Algorithm,
        processes: &[ProcessRecord],
        params: &mut dyn ParameterSource,
    ) -> Result<Box<dyn CpuScheduler>, ScheduleError> {
        let scheduler: Box<dyn CpuScheduler> = match algorithm {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::Priority => Box::new(Self::collect_priorities(processes, params)?),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(Self::collect_quantum(params)?)?),
        };
        Ok(scheduler)
    }

    /// Asks for one priority per process, in input order.
    fn collect_priorities(
        processes: &[ProcessRecord],
        params: &mut dyn ParameterSource,
    ) -> Result<PriorityScheduling, ScheduleError> {
        processes
            .iter()
            .map(|p| {
                params
                    .priority(p)
                    .map(|priority| (p.id.clone(), priority))
                    .ok_or_else(|| ScheduleError::MissingPriority {
                        process_id: p.id.clone(),
                    })
            })
            .collect()
    }

    fn collect_quantum(params: &mut dyn ParameterSource) -> Result<Time, ScheduleError> {
        params.quantum().ok_or(ScheduleError::MissingQuantum)
    }

    /// Snapshots every parameter any algorithm could need.
    fn collect(processes: &[ProcessRecord], params: &mut dyn ParameterSource) -> RunParameters {
        let mut collected = RunParameters::new();
        for p in processes {
            if let Some(priority) = params.priority(p) {
                collected.priorities.insert(p.id.clone(), priority);
            }
        }
        collected.quantum = params.quantum();
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttSegment;
    use crate::validation::ValidationErrorKind;

    fn sample_processes() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new("P1", 0, 4),
            ProcessRecord::new("P2", 1, 3),
        ]
    }

    /// Source that counts how often it is queried.
    #[derive(Default)]
    struct Counting {
        priority_calls: usize,
        quantum_calls: usize,
    }

    impl ParameterSource for Counting {
        fn priority(&mut self, _process: &ProcessRecord) -> Option<i64> {
            self.priority_calls += 1;
            Some(self.priority_calls as i64)
        }

        fn quantum(&mut self) -> Option<Time> {
            self.quantum_calls += 1;
            Some(2)
        }
    }

    #[test]
    fn test_run_round_robin() {
        let mut params = RunParameters::new().with_quantum(2);
        let result = Simulator::run(Algorithm::RoundRobin, &sample_processes(), &mut params).unwrap();
        assert_eq!(result.algorithm, Algorithm::RoundRobin);
        assert_eq!(result.gantt[3], GanttSegment::new("P2", 6, 7));
    }

    #[test]
    fn test_invalid_input_rejected() {
        let processes = vec![ProcessRecord::new("P1", 0, 1), ProcessRecord::new("P1", 2, 1)];
        let err = Simulator::run(Algorithm::Fcfs, &processes, &mut RunParameters::new()).unwrap_err();
        match err {
            ScheduleError::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_time_overflow_rejected_before_running() {
        let processes = vec![ProcessRecord::new("P1", Time::MAX - 1, 5)];
        let mut params = RunParameters::new().with_priority("P1", 0).with_quantum(2);
        for algorithm in Algorithm::ALL {
            match Simulator::run(algorithm, &processes, &mut params) {
                Err(ScheduleError::InvalidInput(errors)) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow)
                }
                other => panic!("{algorithm}: unexpected outcome {other:?}"),
            }
        }

        let half = Time::MAX / 2 + 1;
        let processes = vec![ProcessRecord::new("P1", 0, half), ProcessRecord::new("P2", 0, half)];
        assert!(matches!(
            Simulator::run_all(&processes, &mut params),
            Err(ScheduleError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_near_limit_times_run() {
        let processes = vec![
            ProcessRecord::new("P1", 0, 2),
            ProcessRecord::new("P2", Time::MAX - 5, 3),
        ];
        let mut params = RunParameters::new()
            .with_priority("P1", 1)
            .with_priority("P2", 0)
            .with_quantum(2);
        for (algorithm, result) in Simulator::run_all(&processes, &mut params).unwrap() {
            assert_eq!(result.makespan(), Time::MAX - 2, "{algorithm}");
            assert_eq!(result.process("P2").unwrap().waiting_time, 0);
        }
    }

    #[test]
    fn test_missing_quantum() {
        let err = Simulator::run(
            Algorithm::RoundRobin,
            &sample_processes(),
            &mut RunParameters::new(),
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::MissingQuantum);
    }

    #[test]
    fn test_zero_quantum() {
        let mut params = RunParameters::new().with_quantum(0);
        let err = Simulator::run(Algorithm::RoundRobin, &sample_processes(), &mut params).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidQuantum(0));
    }

    #[test]
    fn test_missing_priority() {
        let mut params = RunParameters::new().with_priority("P1", 1);
        let err = Simulator::run(Algorithm::Priority, &sample_processes(), &mut params).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::MissingPriority {
                process_id: "P2".into()
            }
        );
    }

    #[test]
    fn test_priorities_asked_once_per_process() {
        let mut source = Counting::default();
        let result = Simulator::run(Algorithm::Priority, &sample_processes(), &mut source).unwrap();
        assert_eq!(source.priority_calls, 2);
        assert_eq!(source.quantum_calls, 0);
        // P1 → 1, P2 → 2
        assert_eq!(result.process("P2").unwrap().priority, Some(2));
    }

    #[test]
    fn test_fcfs_does_not_query_parameters() {
        let mut source = Counting::default();
        Simulator::run(Algorithm::Fcfs, &sample_processes(), &mut source).unwrap();
        assert_eq!(source.priority_calls, 0);
        assert_eq!(source.quantum_calls, 0);
    }

    #[test]
    fn test_run_all() {
        let mut params = RunParameters::new()
            .with_priority("P1", 2)
            .with_priority("P2", 1)
            .with_quantum(2);
        let results = Simulator::run_all(&sample_processes(), &mut params).unwrap();
        let algorithms: Vec<Algorithm> = results.iter().map(|(a, _)| *a).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());
        for (_, result) in &results {
            assert_eq!(result.busy_time(), 7);
        }
    }

    #[test]
    fn test_run_all_queries_source_once() {
        let mut source = Counting::default();
        Simulator::run_all(&sample_processes(), &mut source).unwrap();
        assert_eq!(source.priority_calls, 2);
        assert_eq!(source.quantum_calls, 1);
    }

    #[test]
    fn test_run_all_rejects_before_querying_source() {
        let processes = vec![ProcessRecord::new("P1", 0, 0)];
        let mut source = Counting::default();
        let err = Simulator::run_all(&processes, &mut source).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
        assert_eq!(source.priority_calls, 0);
        assert_eq!(source.quantum_calls, 0);
    }

    #[test]
    fn test_empty_input_every_algorithm() {
        let mut params = RunParameters::new().with_quantum(1);
        for algorithm in Algorithm::ALL {
            let result = Simulator::run(algorithm, &[], &mut params).unwrap();
            assert!(result.is_empty(), "{algorithm} should return an empty result");
            assert!(result.averages.is_none());
        }
    }
}
