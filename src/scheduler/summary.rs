//! Aggregate metrics across all processes of one run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total / Avg TAT | Sum / mean of turnaround times |
//! | Total / Avg WT | Sum / mean of waiting times |
//! | Max WT | Longest single wait |
//! | Avg Response | Mean of first-dispatch delays |
//! | Makespan | Latest completion time |
//! | Utilization | Busy time / makespan |
//! | Throughput | Processes completed per time unit |

use serde::{Deserialize, Serialize};

use super::MetricsRecord;
use crate::error::{SimulationError, SimulationResult};
use crate::models::Timeline;

/// Aggregate performance indicators for one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Number of processes summarized.
    pub process_count: usize,
    /// Sum of turnaround times.
    pub total_tat: i64,
    /// Sum of waiting times.
    pub total_wt: i64,
    /// Mean turnaround time.
    pub avg_tat: f64,
    /// Mean waiting time.
    pub avg_wt: f64,
    /// Largest waiting time of any process.
    pub max_wt: i64,
    /// Mean response time.
    pub avg_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// CPU utilization (0.0..1.0).
    pub utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl MetricsSummary {
    /// Computes aggregates from metrics records and their timeline.
    ///
    /// Averages are 0.0 when there are no records. Fails with
    /// `ClockOverflow` if a total does not fit in `i64`.
    pub fn calculate(records: &[MetricsRecord], timeline: &Timeline) -> SimulationResult<Self> {
        let count = records.len();
        let total_tat = checked_total(records.iter().map(|r| r.tat))?;
        let total_wt = checked_total(records.iter().map(|r| r.wt))?;
        let total_response = checked_total(records.iter().map(|r| r.response))?;
        let max_wt = records.iter().map(|r| r.wt).max().unwrap_or(0);

        let mean = |total: i64| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        let makespan = timeline.makespan();
        let throughput = if makespan <= 0 {
            0.0
        } else {
            count as f64 / makespan as f64
        };

        Ok(Self {
            process_count: count,
            total_tat,
            total_wt,
            avg_tat: mean(total_tat),
            avg_wt: mean(total_wt),
            max_wt,
            avg_response: mean(total_response),
            makespan,
            utilization: timeline.utilization().unwrap_or(0.0),
            throughput,
        })
    }
}

fn checked_total(mut values: impl Iterator<Item = i64>) -> SimulationResult<i64> {
    values.try_fold(0i64, |acc, v| {
        acc.checked_add(v).ok_or(SimulationError::ClockOverflow)
    })
}
