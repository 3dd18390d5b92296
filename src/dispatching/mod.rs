//! Selection rules and rule engine for non-preemptive dispatch.
//!
//! At every decision point the non-preemptive scheduler asks a
//! [`RuleEngine`] which of the arrived, unfinished processes runs next.
//! Rules score processes; the lowest score wins and exact ties fall back
//! to registry order.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{DispatchContext, RuleEngine};
//! use cpu_schedule::dispatching::rules;
//! use cpu_schedule::models::Process;
//!
//! let processes = vec![Process::new("P1", 6), Process::new("P2", 2)];
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//! let ctx = DispatchContext::at_time(0);
//!
//! assert_eq!(engine.select_best(&processes, 0..2, &ctx), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = f64;

/// A rule that ranks runnable processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that prefer larger values
/// (e.g., response ratio) return the negation.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates a runnable process at the current clock.
    ///
    /// Returns a score where lower = dispatched first.
    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore;

    /// Orders two runnable processes; `Less` means `a` runs first.
    ///
    /// Defaults to comparing scores. Rules keyed on integer fields override
    /// this to compare exactly.
    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        self.evaluate(a, context)
            .partial_cmp(&self.evaluate(b, context))
            .unwrap_or(Ordering::Equal)
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
