//! Simulation error taxonomy.
//!
//! Every failure is local to one simulation invocation: policies work on
//! copied state, so an error never leaves the registry or an earlier
//! report in a modified state.

use std::fmt;

/// Result alias for simulation operations.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors raised by the scheduler engine and metrics calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Missing or non-positive quantum, unknown policy, or a zero step cap.
    InvalidConfiguration(String),
    /// A process violates an input precondition (burst, arrival, id).
    InvalidProcess {
        /// Offending process ID.
        id: String,
        /// Which precondition failed.
        reason: String,
    },
    /// Two processes in the registry share an ID.
    DuplicateProcessId(String),
    /// The engine exceeded the step count any valid registry needs; it is
    /// not making progress.
    NonConvergence {
        /// Steps taken before giving up.
        steps: u64,
    },
    /// The run hit the caller-supplied step cap before finishing.
    StepLimitExceeded {
        /// The configured cap.
        limit: u64,
    },
    /// Simulated time or a time metric overflowed `i64`.
    ClockOverflow,
    /// A registry process never appears in the timeline.
    MissingCompletion(String),
    /// A derived waiting time is negative; the timeline contradicts the registry.
    NegativeWaitingTime {
        /// Offending process ID.
        id: String,
        /// The computed waiting time.
        wt: i64,
    },
}

impl SimulationError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::InvalidProcess { id, reason } => {
                write!(f, "invalid process '{id}': {reason}")
            }
            Self::DuplicateProcessId(id) => write!(f, "duplicate process ID: {id}"),
            Self::NonConvergence { steps } => {
                write!(f, "simulation did not converge after {steps} steps")
            }
            Self::StepLimitExceeded { limit } => {
                write!(f, "simulation exceeded step limit of {limit}")
            }
            Self::ClockOverflow => write!(f, "simulated clock overflowed"),
            Self::MissingCompletion(id) => {
                write!(f, "process '{id}' was never scheduled")
            }
            Self::NegativeWaitingTime { id, wt } => {
                write!(f, "process '{id}' has negative waiting time {wt}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
