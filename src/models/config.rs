//! Simulation configuration.
//!
//! Selects the dispatch policy and its parameters. Configurations are
//! validated before any simulation work begins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SimulationError, SimulationResult};

/// CPU dispatch policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-come-first-served.
    Fcfs,
    /// Non-preemptive shortest job first.
    Sjf,
    /// Non-preemptive priority (lower value = more urgent).
    Priority,
    /// Non-preemptive highest response ratio next.
    Hrrn,
    /// Preemptive round-robin with a fixed quantum.
    RoundRobin,
}

impl Policy {
    /// All supported policies, in presentation order.
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::Hrrn,
        Policy::RoundRobin,
    ];

    /// Short identifier (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Priority => "Priority",
            Policy::Hrrn => "HRRN",
            Policy::RoundRobin => "RR",
        }
    }

    /// Whether the policy needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Whether the policy reads process priorities.
    pub fn uses_priority(&self) -> bool {
        matches!(self, Policy::Priority)
    }

    /// Chart/table label, e.g. "Round Robin (q=2)".
    pub fn display_name(&self, quantum: Option<i64>) -> String {
        match (self, quantum) {
            (Policy::RoundRobin, Some(q)) => format!("Round Robin (q={q})"),
            (Policy::RoundRobin, None) => "Round Robin".to_string(),
            (other, _) => other.name().to_string(),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Policy::Fcfs),
            "sjf" | "spn" => Ok(Policy::Sjf),
            "priority" => Ok(Policy::Priority),
            "hrrn" => Ok(Policy::Hrrn),
            "rr" | "round_robin" | "round-robin" => Ok(Policy::RoundRobin),
            other => Err(SimulationError::invalid_config(format!(
                "unknown policy selector '{other}'"
            ))),
        }
    }
}

/// Policy selection plus parameters for one simulation run.
///
/// # Example
/// ```
/// use cpu_schedule::models::{Policy, SimulationConfig};
///
/// let config = SimulationConfig::round_robin(2);
/// assert_eq!(config.policy, Policy::RoundRobin);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Dispatch policy.
    pub policy: Policy,
    /// Time quantum. Required iff `policy` is round-robin.
    #[serde(default)]
    pub quantum: Option<i64>,
    /// Optional cap on engine steps (dispatches + idle jumps).
    ///
    /// `None` runs until every process completes; the engine still stops
    /// with `NonConvergence` if it exceeds the steps the input can need.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl SimulationConfig {
    /// Creates a config for a policy with no quantum.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: None,
            max_steps: None,
        }
    }

    /// Round-robin config with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self::new(Policy::RoundRobin).with_quantum(quantum)
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Caps the number of engine steps.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Label used by presentation layers.
    pub fn display_name(&self) -> String {
        self.policy.display_name(self.quantum)
    }

    /// Checks that the configuration is runnable.
    ///
    /// Round-robin needs `quantum >= 1`. A quantum on other policies is
    /// ignored rather than rejected.
    pub fn validate(&self) -> SimulationResult<()> {
        if self.max_steps == Some(0) {
            return Err(SimulationError::invalid_config("max_steps must be >= 1"));
        }
        if self.policy.requires_quantum() {
            match self.quantum {
                None => {
                    return Err(SimulationError::invalid_config(
                        "round robin requires a quantum",
                    ))
                }
                Some(q) if q < 1 => {
                    return Err(SimulationError::invalid_config(format!(
                        "quantum must be >= 1, got {q}"
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
