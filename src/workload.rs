//! Random workload generation.
//!
//! Produces process lists for experiments and property tests. Pass a
//! seeded RNG for reproducible workloads.

use rand::Rng;

use crate::models::{ProcessRecord, Time};

/// Generator of random process lists.
///
/// IDs are `P1`, `P2`, ... in input order; arrivals are uniform in
/// `[0, max_arrival]` and bursts uniform in `[min_burst, max_burst]`.
///
/// # Example
///
/// ```
/// use cpu_sched::workload::WorkloadGenerator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let processes = WorkloadGenerator::new(5).with_burst_range(2, 4).generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (2..=4).contains(&p.burst)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: Time,
    min_burst: Time,
    max_burst: Time,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes (arrivals in `[0, 10]`,
    /// bursts in `[1, 10]`).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: Time) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive). A zero lower bound is raised to 1
    /// and the bounds are swapped if given in reverse.
    pub fn with_burst_range(mut self, min_burst: Time, max_burst: Time) -> Self {
        let (lo, hi) = if min_burst <= max_burst {
            (min_burst, max_burst)
        } else {
            (max_burst, min_burst)
        };
        self.min_burst = lo.max(1);
        self.max_burst = hi.max(self.min_burst);
        self
    }

    /// Generates one process list.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessRecord> {
        (1..=self.count)
            .map(|n| {
                ProcessRecord::new(
                    format!("P{n}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(self.min_burst..=self.max_burst),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(20).with_max_arrival(5);
        for _ in 0..10 {
            let processes = generator.generate(&mut rng);
            assert_eq!(processes.len(), 20);
            assert!(validate_processes(&processes).is_ok());
            assert!(processes.iter().all(|p| p.arrival <= 5));
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let generator = WorkloadGenerator::new(6);
        let a = generator.generate(&mut StdRng::seed_from_u64(9));
        let b = generator.generate(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_burst_range_normalized() {
        let generator = WorkloadGenerator::new(3).with_burst_range(5, 0);
        let processes = generator.generate(&mut StdRng::seed_from_u64(1));
        assert!(processes.iter().all(|p| (1..=5).contains(&p.burst)));
    }

    #[test]
    fn test_ids_sequential() {
        let processes = WorkloadGenerator::new(3).generate(&mut StdRng::seed_from_u64(3));
        let ids: Vec<&str> = processes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }
}
