//! Rule engine for non-preemptive selection.
//!
//! Chains selection rules: the first rule decides, later rules only break
//! exact ties, and remaining ties go to the earliest registry entry.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, SelectionRule};
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::RuleEngine;
/// use cpu_schedule::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::LowestPriority)
///     .with_rule(rules::ShortestBurst);
/// assert_eq!(engine.rule_names(), vec!["Priority", "SJF"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every candidate ties, so the first candidate wins.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. The first rule added is the primary key.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, primary first.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Primary rule name, or "FIFO" when no rule is configured.
    pub fn primary_name(&self) -> &'static str {
        self.rules.first().map_or("FIFO", |r| r.name())
    }

    /// Returns the index of the best candidate.
    ///
    /// `candidates` yields indices into `processes`, normally in registry
    /// order. A later candidate replaces the current best only when it
    /// compares strictly less, so the earliest candidate wins ties.
    pub fn select_best<I>(
        &self,
        processes: &[Process],
        candidates: I,
        context: &DispatchContext,
    ) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut best: Option<usize> = None;
        for idx in candidates {
            best = match best {
                Some(current)
                    if self.compare(&processes[idx], &processes[current], context)
                        != Ordering::Less =>
                {
                    Some(current)
                }
                _ => Some(idx),
            };
        }
        best
    }

    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.compare(a, b, context))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn all(processes: &[Process]) -> std::ops::Range<usize> {
        0..processes.len()
    }

    #[test]
    fn test_shortest_burst_selection() {
        let processes = vec![
            Process::new("long", 8),
            Process::new("short", 2),
            Process::new("medium", 4),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.select_best(&processes, all(&processes), &ctx), Some(1));
    }

    #[test]
    fn test_large_bursts_not_treated_as_ties() {
        let processes = vec![
            Process::new("A", (1i64 << 53) + 1),
            Process::new("B", 1i64 << 53),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.select_best(&processes, all(&processes), &ctx), Some(1));
    }

    #[test]
    fn test_registry_order_breaks_ties() {
        let processes = vec![
            Process::new("B", 3),
            Process::new("A", 3),
            Process::new("C", 3),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        // Lowest index wins, not lowest ID
        assert_eq!(engine.select_best(&processes, all(&processes), &ctx), Some(0));
    }

    #[test]
    fn test_secondary_rule_breaks_ties() {
        let processes = vec![
            Process::new("P1", 5).with_priority(1),
            Process::new("P2", 2).with_priority(1),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::LowestPriority)
            .with_rule(rules::ShortestBurst);
        assert_eq!(engine.select_best(&processes, all(&processes), &ctx), Some(1));
    }

    #[test]
    fn test_candidate_subset() {
        let processes = vec![
            Process::new("P1", 1),
            Process::new("P2", 5),
            Process::new("P3", 3),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        // P1 excluded (e.g., already finished)
        assert_eq!(engine.select_best(&processes, [1, 2], &ctx), Some(2));
    }

    #[test]
    fn test_empty_candidates() {
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert!(engine.select_best(&[], 0..0, &ctx).is_none());
    }

    #[test]
    fn test_no_rules_is_fifo() {
        let processes = vec![Process::new("P1", 9), Process::new("P2", 1)];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new();
        assert_eq!(engine.primary_name(), "FIFO");
        assert_eq!(engine.select_best(&processes, all(&processes), &ctx), Some(0));
    }
}
