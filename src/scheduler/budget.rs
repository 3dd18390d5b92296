//! Step accounting and checked clock arithmetic shared by the policies.

use log::warn;

use crate::error::{SimulationError, SimulationResult};

/// Bounds the number of engine steps (dispatches and idle jumps) in one run.
///
/// `bound` is the most steps a valid registry can need, derived from the
/// input by each policy; passing it means the engine stopped making
/// progress. `cap` is an optional, tighter limit chosen by the caller.
#[derive(Debug, Clone)]
pub(crate) struct StepBudget {
    bound: u64,
    cap: Option<u64>,
    used: u64,
}

impl StepBudget {
    pub(crate) fn new(bound: u64, cap: Option<u64>) -> Self {
        Self {
            bound,
            cap,
            used: 0,
        }
    }

    /// Consumes one step, failing once the cap or the bound is exhausted.
    pub(crate) fn tick(&mut self) -> SimulationResult<()> {
        if let Some(limit) = self.cap {
            if self.used >= limit {
                warn!("simulation hit step cap of {limit}");
                return Err(SimulationError::StepLimitExceeded { limit });
            }
        }
        if self.used >= self.bound {
            warn!("simulation made no progress within {} steps", self.bound);
            return Err(SimulationError::NonConvergence { steps: self.used });
        }
        self.used += 1;
        Ok(())
    }

    pub(crate) fn used(&self) -> u64 {
        self.used
    }
}

/// Advances the clock by `by` time units.
#[inline]
pub(crate) fn advance(clock: i64, by: i64) -> SimulationResult<i64> {
    clock.checked_add(by).ok_or(SimulationError::ClockOverflow)
}
