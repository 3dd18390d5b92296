//! Preemptive round-robin scheduling.
//!
//! # Algorithm
//!
//! Maintains a FIFO ready queue of registry indices and a working copy of
//! each process's remaining burst.
//!
//! 1. Processes arriving at t=0 enter the queue in registry order.
//! 2. If the queue is empty, jump the clock to the earliest arrival among
//!    not-yet-queued processes and enqueue everything that has arrived.
//! 3. Otherwise run the head for `min(quantum, remaining)` as one interval.
//! 4. Enqueue new arrivals (registry order) *before* re-queuing the
//!    preempted process, so arrivals during a slice go ahead of it.
//! 5. Re-queue the preempted process at the tail if work remains.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use log::{debug, trace};

use super::budget::{advance, StepBudget};
use crate::error::{SimulationError, SimulationResult};
use crate::models::{ExecutionInterval, Process, Timeline};
use crate::validation::ensure_valid;

/// Round-robin scheduler with a fixed time quantum.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::RoundRobinScheduler;
///
/// let processes = vec![
///     Process::new("P1", 5),
///     Process::new("P2", 3).with_arrival(1),
/// ];
/// let scheduler = RoundRobinScheduler::new(2).unwrap();
/// let timeline = scheduler.schedule(&processes).unwrap();
/// assert_eq!(timeline.len(), 5);
/// assert_eq!(timeline.completion_time("P1"), Some(8));
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    quantum: i64,
    max_steps: Option<u64>,
}

impl RoundRobinScheduler {
    /// Creates a scheduler. Fails if `quantum < 1`.
    pub fn new(quantum: i64) -> SimulationResult<Self> {
        if quantum < 1 {
            return Err(SimulationError::invalid_config(format!(
                "quantum must be >= 1, got {quantum}"
            )));
        }
        Ok(Self {
            quantum,
            max_steps: None,
        })
    }

    /// Caps the number of engine steps (`None` = no cap).
    pub fn with_max_steps(mut self, max_steps: impl Into<Option<u64>>) -> Self {
        self.max_steps = max_steps.into();
        self
    }

    /// Schedules processes, one interval per quantum slice.
    pub fn schedule(&self, processes: &[Process]) -> SimulationResult<Timeline> {
        ensure_valid(processes)?;
        debug!(
            "RR: scheduling {} processes with quantum {}",
            processes.len(),
            self.quantum
        );

        let n = processes.len();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut queued = vec![false; n];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut completed = 0;
        let mut clock = 0;
        let mut budget = StepBudget::new(step_bound(processes), self.max_steps);
        let mut timeline = Timeline::new();

        enqueue_arrivals(processes, clock, &mut queued, &mut queue);

        while completed < n {
            budget.tick()?;

            let Some(idx) = queue.pop_front() else {
                let next_arrival = (0..n)
                    .filter(|&i| !queued[i])
                    .map(|i| processes[i].arrival)
                    .min()
                    .ok_or(SimulationError::NonConvergence {
                        steps: budget.used(),
                    })?;
                trace!("RR: idle {clock}..{next_arrival}");
                clock = clock.max(next_arrival);
                enqueue_arrivals(processes, clock, &mut queued, &mut queue);
                continue;
            };

            let slice = self.quantum.min(remaining[idx]);
            let end = advance(clock, slice)?;
            trace!("RR: dispatch {} [{clock}, {end})", processes[idx].id);
            timeline.push(ExecutionInterval::new(processes[idx].id.as_str(), clock, end));
            clock = end;
            remaining[idx] -= slice;

            enqueue_arrivals(processes, clock, &mut queued, &mut queue);

            if remaining[idx] > 0 {
                queue.push_back(idx);
            } else {
                completed += 1;
            }
        }

        Ok(timeline)
    }
}

/// Most steps a valid registry can take.
///
/// Every slice runs at least one unit of some positive remaining burst,
/// and every idle refill enqueues at least one new process.
fn step_bound(processes: &[Process]) -> u64 {
    processes
        .iter()
        .map(|p| p.burst.max(0) as u64)
        .fold(processes.len() as u64, u64::saturating_add)
}

/// Enqueues, in registry order, every not-yet-queued process that has arrived.
fn enqueue_arrivals(
    processes: &[Process],
    clock: i64,
    queued: &mut [bool],
    queue: &mut VecDeque<usize>,
) {
    for (i, p) in processes.iter().enumerate() {
        if !queued[i] && p.has_arrived(clock) {
            queued[i] = true;
            queue.push_back(i);
        }
    }
}

/// Schedules `processes` round-robin with the given quantum.
pub fn round_robin(processes: &[Process], quantum: i64) -> SimulationResult<Timeline> {
    RoundRobinScheduler::new(quantum)?.schedule(processes)
}
