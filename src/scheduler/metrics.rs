//! Per-process performance metrics.
//!
//! Derives completion, turnaround, waiting and response times from a
//! registry and the timeline one policy produced for it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | CT | End of the process's last interval |
//! | TAT | CT - arrival |
//! | WT | TAT - burst |
//! | Response | First start - arrival |

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{SimulationError, SimulationResult};
use crate::models::{Process, Timeline};

/// Metrics for one process under one timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Process ID.
    pub id: String,
    /// Arrival time (copied from the registry).
    pub arrival: i64,
    /// Burst (copied from the registry).
    pub burst: i64,
    /// Priority (copied from the registry).
    pub priority: i32,
    /// Completion time.
    pub ct: i64,
    /// Turnaround time: `ct - arrival`.
    pub tat: i64,
    /// Waiting time: `tat - burst`.
    pub wt: i64,
    /// Response time: first dispatch - arrival.
    pub response: i64,
}

/// Computes one metrics record per process, in registry order.
///
/// # Errors
/// - `DuplicateProcessId` if the registry repeats an ID (completion times
///   would otherwise merge silently).
/// - `MissingCompletion` if a process never appears in the timeline.
/// - `NegativeWaitingTime` if the timeline finishes a process sooner than
///   its burst allows.
/// - `ClockOverflow` if a derived time does not fit in `i64`.
pub fn compute_metrics(
    processes: &[Process],
    timeline: &Timeline,
) -> SimulationResult<Vec<MetricsRecord>> {
    let mut seen = HashSet::new();
    for p in processes {
        if !seen.insert(p.id.as_str()) {
            return Err(SimulationError::DuplicateProcessId(p.id.clone()));
        }
    }

    // Scanning backward, the first interval seen for an ID is its last.
    let mut completion: HashMap<&str, i64> = HashMap::new();
    for iv in timeline.iter().rev() {
        completion.entry(iv.id.as_str()).or_insert(iv.end);
    }
    let mut first_start: HashMap<&str, i64> = HashMap::new();
    for iv in timeline.iter() {
        first_start.entry(iv.id.as_str()).or_insert(iv.start);
    }

    processes
        .iter()
        .map(|p| -> SimulationResult<MetricsRecord> {
            let ct = *completion
                .get(p.id.as_str())
                .ok_or_else(|| SimulationError::MissingCompletion(p.id.clone()))?;
            let start = first_start.get(p.id.as_str()).copied().unwrap_or(ct);
            let tat = elapsed(ct, p.arrival)?;
            let wt = elapsed(tat, p.burst)?;
            if wt < 0 {
                return Err(SimulationError::NegativeWaitingTime {
                    id: p.id.clone(),
                    wt,
                });
            }
            Ok(MetricsRecord {
                id: p.id.clone(),
                arrival: p.arrival,
                burst: p.burst,
                priority: p.priority,
                ct,
                tat,
                wt,
                response: elapsed(start, p.arrival)?,
            })
        })
        .collect()
}

#[inline]
fn elapsed(to: i64, from: i64) -> SimulationResult<i64> {
    to.checked_sub(from).ok_or(SimulationError::ClockOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;

    fn rr_timeline() -> Timeline {
        Timeline::from_intervals(vec![
            ExecutionInterval::new("P1", 0, 2),
            ExecutionInterval::new("P2", 2, 4),
            ExecutionInterval::new("P1", 4, 6),
            ExecutionInterval::new("P2", 6, 7),
            ExecutionInterval::new("P1", 7, 8),
        ])
    }

    #[test]
    fn test_fcfs_metrics() {
        let processes = vec![Process::new("P1", 4), Process::new("P2", 2).with_arrival(1)];
        let timeline = Timeline::from_intervals(vec![
            ExecutionInterval::new("P1", 0, 4),
            ExecutionInterval::new("P2", 4, 6),
        ]);
        let records = compute_metrics(&processes, &timeline).unwrap();
        assert_eq!(records[0].ct, 4);
        assert_eq!(records[0].wt, 0);
        assert_eq!(records[1].ct, 6);
        assert_eq!(records[1].tat, 5);
        assert_eq!(records[1].wt, 3);
        assert_eq!(records[1].response, 3);
    }

    #[test]
    fn test_uses_last_interval() {
        let processes = vec![Process::new("P1", 5), Process::new("P2", 3).with_arrival(1)];
        let records = compute_metrics(&processes, &rr_timeline()).unwrap();
        // P1: ct 8, tat 8, wt 3, response 0
        assert_eq!(
            records[0],
            MetricsRecord {
                id: "P1".into(),
                arrival: 0,
                burst: 5,
                priority: 1,
                ct: 8,
                tat: 8,
                wt: 3,
                response: 0,
            }
        );
        // P2: ct 7, tat 6, wt 3, response 1
        assert_eq!(records[1].ct, 7);
        assert_eq!(records[1].tat, 6);
        assert_eq!(records[1].wt, 3);
        assert_eq!(records[1].response, 1);
    }

    #[test]
    fn test_registry_order_preserved() {
        let processes = vec![Process::new("P2", 3).with_arrival(1), Process::new("P1", 5)];
        let records = compute_metrics(&processes, &rr_timeline()).unwrap();
        assert_eq!(records[0].id, "P2");
        assert_eq!(records[1].id, "P1");
    }

    #[test]
    fn test_missing_completion() {
        let processes = vec![Process::new("P1", 5), Process::new("P9", 1)];
        assert_eq!(
            compute_metrics(&processes, &rr_timeline()).unwrap_err(),
            SimulationError::MissingCompletion("P9".into())
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let processes = vec![Process::new("P1", 5), Process::new("P1", 3)];
        assert_eq!(
            compute_metrics(&processes, &rr_timeline()).unwrap_err(),
            SimulationError::DuplicateProcessId("P1".into())
        );
    }

    #[test]
    fn test_negative_waiting_time() {
        // Timeline claims P1 finished at 2 but its burst is 5.
        let processes = vec![Process::new("P1", 5)];
        let timeline = Timeline::from_intervals(vec![ExecutionInterval::new("P1", 0, 2)]);
        assert_eq!(
            compute_metrics(&processes, &timeline).unwrap_err(),
            SimulationError::NegativeWaitingTime {
                id: "P1".into(),
                wt: -3
            }
        );
    }

    #[test]
    fn test_turnaround_overflow() {
        let processes = vec![Process::new("P1", 1).with_arrival(5)];
        let timeline =
            Timeline::from_intervals(vec![ExecutionInterval::new("P1", i64::MIN, i64::MIN + 1)]);
        assert_eq!(
            compute_metrics(&processes, &timeline).unwrap_err(),
            SimulationError::ClockOverflow
        );
    }

    #[test]
    fn test_empty() {
        assert!(compute_metrics(&[], &Timeline::new()).unwrap().is_empty());
    }
}
