//! Built-in selection rules.
//!
//! | Rule | Policy | Score |
//! |------|--------|-------|
//! | `ShortestBurst` | SJF | burst |
//! | `LowestPriority` | Priority | priority value |
//! | `HighestResponseRatio` | HRRN | -(wait + burst) / burst |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use std::cmp::Ordering;

use super::{DispatchContext, RuleScore, SelectionRule};
use crate::models::Process;

/// Shortest burst (shortest job first).
///
/// Compares the original burst. Non-preemptive dispatch never runs a
/// process partially, so burst and remaining work coincide at selection.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.burst as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &DispatchContext) -> Ordering {
        a.burst.cmp(&b.burst)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Lowest priority value first (lower value = more urgent).
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl SelectionRule for LowestPriority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.priority as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &DispatchContext) -> Ordering {
        a.priority.cmp(&b.priority)
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value First"
    }
}

/// Highest response ratio next.
///
/// Response ratio = (wait + burst) / burst = 1 + wait / burst.
/// Favors short jobs while aging long waiters so they cannot starve.
///
/// # Reference
/// Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"
#[derive(Debug, Clone, Copy)]
pub struct HighestResponseRatio;

impl HighestResponseRatio {
    /// Response ratio of a process at the context's clock.
    pub fn response_ratio(process: &Process, context: &DispatchContext) -> f64 {
        if process.burst <= 0 {
            return f64::MAX;
        }
        1.0 + context.waited_since(process.arrival) as f64 / process.burst as f64
    }
}

impl SelectionRule for HighestResponseRatio {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore {
        -Self::response_ratio(process, context)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}
