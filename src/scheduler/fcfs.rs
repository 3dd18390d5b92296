//! First-come-first-served scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep registry order).
//! 2. Walk the sorted sequence with a clock; if the clock is behind the
//!    next arrival, jump forward (idle gap).
//! 3. Dispatch each process for its full burst as one interval.
//!
//! # Complexity
//! O(n log n) for the sort.

use log::{debug, trace};

use super::budget::advance;
use crate::error::SimulationResult;
use crate::models::{ExecutionInterval, Process, Timeline};
use crate::validation::ensure_valid;

/// First-come-first-served scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::FcfsScheduler;
///
/// let processes = vec![
///     Process::new("P1", 4),
///     Process::new("P2", 2).with_arrival(1),
/// ];
/// let timeline = FcfsScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(timeline.completion_time("P2"), Some(6));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules processes in arrival order.
    pub fn schedule(&self, processes: &[Process]) -> SimulationResult<Timeline> {
        ensure_valid(processes)?;
        debug!("FCFS: scheduling {} processes", processes.len());

        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by_key(|p| p.arrival); // Stable

        let mut timeline = Timeline::new();
        let mut clock = 0;
        for p in order {
            if clock < p.arrival {
                trace!("FCFS: idle {clock}..{}", p.arrival);
                clock = p.arrival;
            }
            let end = advance(clock, p.burst)?;
            trace!("FCFS: dispatch {} [{clock}, {end})", p.id);
            timeline.push(ExecutionInterval::new(p.id.as_str(), clock, end));
            clock = end;
        }

        Ok(timeline)
    }
}

/// Schedules `processes` first-come-first-served.
pub fn fcfs(processes: &[Process]) -> SimulationResult<Timeline> {
    FcfsScheduler::new().schedule(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;

    #[test]
    fn test_fcfs_basic() {
        let processes = vec![Process::new("P1", 4), Process::new("P2", 2).with_arrival(1)];
        let timeline = fcfs(&processes).unwrap();
        assert_eq!(
            timeline.intervals(),
            &[
                ExecutionInterval::new("P1", 0, 4),
                ExecutionInterval::new("P2", 4, 6),
            ]
        );
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![
            Process::new("late", 1).with_arrival(5),
            Process::new("early", 2),
        ];
        let timeline = fcfs(&processes).unwrap();
        assert_eq!(timeline.intervals()[0].id, "early");
        assert_eq!(timeline.intervals()[1], ExecutionInterval::new("late", 5, 6));
    }

    #[test]
    fn test_fcfs_stable_ties() {
        let processes = vec![
            Process::new("B", 1).with_arrival(2),
            Process::new("A", 1).with_arrival(2),
        ];
        let timeline = fcfs(&processes).unwrap();
        // Equal arrival → registry order, not ID order
        assert_eq!(timeline.intervals()[0].id, "B");
        assert_eq!(timeline.intervals()[1].id, "A");
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new("P1", 2), Process::new("P2", 3).with_arrival(10)];
        let timeline = fcfs(&processes).unwrap();
        assert_eq!(timeline.intervals()[1], ExecutionInterval::new("P2", 10, 13));
        assert_eq!(timeline.idle_gaps(), vec![(2, 10)]);
    }

    #[test]
    fn test_fcfs_empty() {
        assert!(fcfs(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_fcfs_rejects_zero_burst() {
        let processes = vec![Process::new("P1", 0)];
        assert!(matches!(
            fcfs(&processes).unwrap_err(),
            SimulationError::InvalidProcess { .. }
        ));
    }

    #[test]
    fn test_fcfs_clock_overflow() {
        let processes = vec![
            Process::new("P1", i64::MAX),
            Process::new("P2", 1),
        ];
        assert_eq!(fcfs(&processes).unwrap_err(), SimulationError::ClockOverflow);
    }
}
