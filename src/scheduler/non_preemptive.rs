//! Non-preemptive rule-driven scheduling (SJF, Priority, HRRN).
//!
//! # Algorithm
//!
//! 1. At the current clock, collect unfinished processes with
//!    `arrival <= clock`.
//! 2. Select the lowest-scoring one via the rule engine; exact ties go to
//!    the lowest registry index.
//! 3. Run it for its full burst as one interval and mark it finished.
//! 4. If nothing is eligible, jump the clock to the earliest arrival among
//!    unfinished processes.
//!
//! Jumping straight to the next arrival produces the same timeline as
//! advancing one unit at a time, since eligibility only changes at
//! arrival instants.
//!
//! # Complexity
//! O(n^2) rule evaluations.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2-5.3.4

use log::{debug, trace};

use super::budget::{advance, StepBudget};
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::error::{SimulationError, SimulationResult};
use crate::models::{ExecutionInterval, Process, Timeline};
use crate::validation::ensure_valid;

/// Non-preemptive scheduler driven by a rule engine.
///
/// # Example
///
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine};
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::NonPreemptiveScheduler;
///
/// let processes = vec![
///     Process::new("P1", 6),
///     Process::new("P2", 2).with_arrival(1),
///     Process::new("P3", 8).with_arrival(2),
/// ];
/// let scheduler = NonPreemptiveScheduler::shortest_job_first();
/// let timeline = scheduler.schedule(&processes).unwrap();
/// assert_eq!(timeline.intervals()[1].id, "P2");
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    rule_engine: RuleEngine,
    max_steps: Option<u64>,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler with the given rule engine.
    pub fn new(rule_engine: RuleEngine) -> Self {
        Self {
            rule_engine,
            max_steps: None,
        }
    }

    /// Shortest job first.
    pub fn shortest_job_first() -> Self {
        Self::new(RuleEngine::new().with_rule(rules::ShortestBurst))
    }

    /// Lowest priority value first.
    pub fn priority() -> Self {
        Self::new(RuleEngine::new().with_rule(rules::LowestPriority))
    }

    /// Highest response ratio next.
    pub fn highest_response_ratio() -> Self {
        Self::new(RuleEngine::new().with_rule(rules::HighestResponseRatio))
    }

    /// Caps the number of engine steps (`None` = no cap).
    pub fn with_max_steps(mut self, max_steps: impl Into<Option<u64>>) -> Self {
        self.max_steps = max_steps.into();
        self
    }

    /// Schedules processes, one full-burst interval each.
    pub fn schedule(&self, processes: &[Process]) -> SimulationResult<Timeline> {
        ensure_valid(processes)?;
        let policy = self.rule_engine.primary_name();
        debug!("{policy}: scheduling {} processes", processes.len());

        let n = processes.len();
        let mut finished = vec![false; n];
        let mut completed = 0;
        let mut clock = 0;
        // One dispatch per process plus at most one idle jump before each.
        let bound = (n as u64).saturating_mul(2);
        let mut budget = StepBudget::new(bound, self.max_steps);
        let mut timeline = Timeline::new();

        while completed < n {
            budget.tick()?;

            let ctx = DispatchContext::at_time(clock);
            let eligible = (0..n).filter(|&i| !finished[i] && processes[i].has_arrived(clock));
            let selected = self.rule_engine.select_best(processes, eligible, &ctx);

            let Some(idx) = selected else {
                let next_arrival = (0..n)
                    .filter(|&i| !finished[i])
                    .map(|i| processes[i].arrival)
                    .min()
                    .filter(|&t| t > clock)
                    .ok_or(SimulationError::NonConvergence {
                        steps: budget.used(),
                    })?;
                trace!("{policy}: idle {clock}..{next_arrival}");
                clock = next_arrival;
                continue;
            };

            let p = &processes[idx];
            let end = advance(clock, p.burst)?;
            trace!("{policy}: dispatch {} [{clock}, {end})", p.id);
            timeline.push(ExecutionInterval::new(p.id.as_str(), clock, end));
            clock = end;
            finished[idx] = true;
            completed += 1;
        }

        Ok(timeline)
    }
}

/// Schedules `processes` shortest-job-first (non-preemptive).
pub fn sjf(processes: &[Process]) -> SimulationResult<Timeline> {
    NonPreemptiveScheduler::shortest_job_first().schedule(processes)
}

/// Schedules `processes` by priority (non-preemptive, lower value first).
pub fn priority(processes: &[Process]) -> SimulationResult<Timeline> {
    NonPreemptiveScheduler::priority().schedule(processes)
}

/// Schedules `processes` highest-response-ratio-next (non-preemptive).
pub fn hrrn(processes: &[Process]) -> SimulationResult<Timeline> {
    NonPreemptiveScheduler::highest_response_ratio().schedule(processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(timeline: &Timeline) -> Vec<&str> {
        timeline.iter().map(|iv| iv.id.as_str()).collect()
    }

    #[test]
    fn test_sjf_selection() {
        let processes = vec![
            Process::new("P1", 6),
            Process::new("P2", 2).with_arrival(1),
            Process::new("P3", 8).with_arrival(2),
        ];
        let timeline = sjf(&processes).unwrap();
        assert_eq!(
            timeline.intervals(),
            &[
                ExecutionInterval::new("P1", 0, 6),
                ExecutionInterval::new("P2", 6, 8),
                ExecutionInterval::new("P3", 8, 16),
            ]
        );
    }

    #[test]
    fn test_sjf_tie_goes_to_registry_order() {
        let processes = vec![
            Process::new("Z", 3),
            Process::new("A", 3),
            Process::new("M", 3),
        ];
        assert_eq!(ids(&sjf(&processes).unwrap()), vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_sjf_idle_jump() {
        let processes = vec![
            Process::new("P1", 2).with_arrival(5),
            Process::new("P2", 1).with_arrival(20),
        ];
        let timeline = sjf(&processes).unwrap();
        assert_eq!(
            timeline.intervals(),
            &[
                ExecutionInterval::new("P1", 5, 7),
                ExecutionInterval::new("P2", 20, 21),
            ]
        );
    }

    #[test]
    fn test_sjf_waits_for_arrival_even_if_shorter_later() {
        // P2 is shorter but not yet arrived at t=0
        let processes = vec![Process::new("P1", 5), Process::new("P2", 1).with_arrival(1)];
        assert_eq!(ids(&sjf(&processes).unwrap()), vec!["P1", "P2"]);
    }

    #[test]
    fn test_priority_selection() {
        let processes = vec![
            Process::new("P1", 3).with_priority(3),
            Process::new("P2", 2).with_arrival(1).with_priority(1),
            Process::new("P3", 1).with_arrival(1).with_priority(2),
        ];
        let timeline = priority(&processes).unwrap();
        assert_eq!(ids(&timeline), vec!["P1", "P2", "P3"]);
        assert_eq!(timeline.intervals()[1], ExecutionInterval::new("P2", 3, 5));
    }

    #[test]
    fn test_priority_ties_registry_order() {
        let processes = vec![
            Process::new("P1", 2).with_priority(1),
            Process::new("P2", 1).with_priority(1),
        ];
        assert_eq!(ids(&priority(&processes).unwrap()), vec!["P1", "P2"]);
    }

    #[test]
    fn test_hrrn_selection() {
        // At t=10: A waited 9 (burst 9) → 2.0; B waited 2 (burst 1) → 3.0
        let processes = vec![
            Process::new("P0", 10),
            Process::new("A", 9).with_arrival(1),
            Process::new("B", 1).with_arrival(8),
        ];
        let timeline = hrrn(&processes).unwrap();
        assert_eq!(ids(&timeline), vec!["P0", "B", "A"]);
    }

    #[test]
    fn test_hrrn_prefers_long_waiter() {
        // At t=10: A waited 10 (burst 5) → 3.0; B waited 0 (burst 1) → 1.0
        let processes = vec![
            Process::new("P0", 10),
            Process::new("A", 5),
            Process::new("B", 1).with_arrival(10),
        ];
        assert_eq!(ids(&hrrn(&processes).unwrap()), vec!["P0", "A", "B"]);
    }

    #[test]
    fn test_step_bound() {
        let processes = vec![Process::new("P1", 1), Process::new("P2", 1)];
        let scheduler = NonPreemptiveScheduler::shortest_job_first().with_max_steps(1);
        assert_eq!(
            scheduler.schedule(&processes).unwrap_err(),
            SimulationError::StepLimitExceeded { limit: 1 }
        );
    }

    #[test]
    fn test_sparse_arrivals_within_bound() {
        // Every dispatch is preceded by an idle jump: 2n steps exactly.
        let processes: Vec<Process> = (0..5)
            .map(|i| Process::new(format!("P{i}"), 1).with_arrival(10 * (i + 1)))
            .collect();
        let timeline = sjf(&processes).unwrap();
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline.idle_gaps().len(), 5);
    }

    #[test]
    fn test_huge_bursts_ordered_exactly() {
        let processes = vec![
            Process::new("A", (1i64 << 53) + 1),
            Process::new("B", 1i64 << 53),
        ];
        assert_eq!(ids(&sjf(&processes).unwrap()), vec!["B", "A"]);
    }

    #[test]
    fn test_empty() {
        assert!(sjf(&[]).unwrap().is_empty());
        assert!(priority(&[]).unwrap().is_empty());
        assert!(hrrn(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let processes = vec![Process::new("P1", 1), Process::new("P1", 2)];
        assert_eq!(
            sjf(&processes).unwrap_err(),
            SimulationError::DuplicateProcessId("P1".into())
        );
    }
}
