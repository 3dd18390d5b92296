//! Random process registry generation.
//!
//! Produces reproducible workloads for comparing policies and for
//! randomized checks of timeline invariants. Seed the RNG to replay a
//! workload exactly.

use rand::Rng;

use crate::models::Process;

/// Generator for random process registries.
///
/// # Example
///
/// ```
/// use cpu_schedule::workload::WorkloadGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let processes = WorkloadGenerator::new().generate(5, &mut rng);
/// assert_eq!(processes.len(), 5);
/// assert_eq!(processes[0].id, "P1");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Latest possible arrival time (arrivals drawn from `0..=max_arrival`).
    pub max_arrival: i64,
    /// Smallest burst.
    pub min_burst: i64,
    /// Largest burst.
    pub max_burst: i64,
    /// Smallest priority value.
    pub min_priority: i32,
    /// Largest priority value.
    pub max_priority: i32,
    /// Prefix for generated IDs ("P" → "P1", "P2", ...).
    pub id_prefix: String,
}

impl WorkloadGenerator {
    /// Creates a generator with modest defaults (arrivals 0..=10, bursts 1..=10).
    pub fn new() -> Self {
        Self {
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 5,
            id_prefix: "P".to_string(),
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range. Bursts are clamped to at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max.max(min);
        self
    }

    /// Sets the ID prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Generates `count` processes with unique IDs in registry order.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Process> {
        (1..=count)
            .map(|i| {
                Process::new(
                    format!("{}{i}", self.id_prefix),
                    rng.random_range(self.min_burst..=self.max_burst),
                )
                .with_arrival(rng.random_range(0..=self.max_arrival))
                .with_priority(rng.random_range(self.min_priority..=self.max_priority))
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
