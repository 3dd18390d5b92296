//! Simulation entry points.
//!
//! Runs one or more policy configurations against a process registry and
//! packages each timeline with its metrics.
//!
//! Each run validates its configuration and the registry before any
//! scheduling work, operates on its own copied state, and never mutates
//! the registry, so runs are independent of order.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    compute_metrics, FcfsScheduler, MetricsRecord, MetricsSummary, NonPreemptiveScheduler,
    RoundRobinScheduler,
};
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Policy, Process, SimulationConfig, Timeline};
use crate::validation::ensure_valid;

/// Result of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced the timeline.
    pub policy: Policy,
    /// Quantum used (round-robin only).
    pub quantum: Option<i64>,
    /// Presentation label, e.g. "Round Robin (q=2)".
    pub label: String,
    /// Dispatch record.
    pub timeline: Timeline,
    /// Per-process metrics, in registry order.
    pub metrics: Vec<MetricsRecord>,
    /// Aggregates over `metrics`.
    pub summary: MetricsSummary,
}

impl SimulationReport {
    /// Metrics record for a given process.
    pub fn record_for(&self, id: &str) -> Option<&MetricsRecord> {
        self.metrics.iter().find(|r| r.id == id)
    }
}

/// Input container for a batch of simulations.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::{Policy, Process, SimulationConfig};
/// use cpu_schedule::scheduler::SimulationRequest;
///
/// let request = SimulationRequest::new(vec![Process::new("P1", 3)])
///     .with_config(SimulationConfig::new(Policy::Fcfs))
///     .with_config(SimulationConfig::round_robin(2));
/// let reports = request.run().unwrap();
/// assert_eq!(reports.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Process registry.
    pub processes: Vec<Process>,
    /// Policies to run, in order.
    pub configs: Vec<SimulationConfig>,
}

impl SimulationRequest {
    /// Creates a request with no policies selected.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            configs: Vec::new(),
        }
    }

    /// Adds a policy configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.configs.push(config);
        self
    }

    /// Runs every configured policy.
    ///
    /// Fails with `InvalidConfiguration` if no policy is selected.
    pub fn run(&self) -> SimulationResult<Vec<SimulationReport>> {
        if self.configs.is_empty() {
            return Err(SimulationError::invalid_config(
                "at least one policy must be selected",
            ));
        }
        simulate_all(&self.processes, &self.configs)
    }
}

/// Produces the timeline for one configuration.
///
/// The configuration must already be valid.
fn run_policy(processes: &[Process], config: &SimulationConfig) -> SimulationResult<Timeline> {
    match config.policy {
        Policy::Fcfs => FcfsScheduler::new().schedule(processes),
        Policy::Sjf => NonPreemptiveScheduler::shortest_job_first()
            .with_max_steps(config.max_steps)
            .schedule(processes),
        Policy::Priority => NonPreemptiveScheduler::priority()
            .with_max_steps(config.max_steps)
            .schedule(processes),
        Policy::Hrrn => NonPreemptiveScheduler::highest_response_ratio()
            .with_max_steps(config.max_steps)
            .schedule(processes),
        Policy::RoundRobin => {
            let quantum = config
                .quantum
                .ok_or_else(|| SimulationError::invalid_config("round robin requires a quantum"))?;
            RoundRobinScheduler::new(quantum)?
                .with_max_steps(config.max_steps)
                .schedule(processes)
        }
    }
}

/// Runs one policy and derives its metrics.
///
/// # Errors
/// Configuration and registry problems are reported before any
/// scheduling work; engine and metrics failures afterwards.
pub fn simulate(
    processes: &[Process],
    config: &SimulationConfig,
) -> SimulationResult<SimulationReport> {
    config.validate()?;
    ensure_valid(processes)?;

    let timeline = run_policy(processes, config)?;
    let metrics = compute_metrics(processes, &timeline)?;
    let summary = MetricsSummary::calculate(&metrics, &timeline)?;
    let label = config.display_name();

    debug!(
        "{label}: makespan {}, avg TAT {:.2}, avg WT {:.2}",
        summary.makespan, summary.avg_tat, summary.avg_wt
    );

    Ok(SimulationReport {
        policy: config.policy,
        quantum: config.quantum.filter(|_| config.policy.requires_quantum()),
        label,
        timeline,
        metrics,
        summary,
    })
}

/// Runs several policies against the same registry, in the given order.
///
/// Stops at the first failing configuration.
pub fn simulate_all(
    processes: &[Process],
    configs: &[SimulationConfig],
) -> SimulationResult<Vec<SimulationReport>> {
    configs
        .iter()
        .map(|config| simulate(processes, config))
        .collect()
}
