//! Execution timeline model.
//!
//! A timeline is the ordered record of dispatch intervals produced by one
//! scheduling run. It is the hand-off format for Gantt rendering and the
//! sole input (together with the registry) of the metrics calculator.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// One contiguous dispatch of a process on the CPU.
///
/// Covers the half-open range `[start, end)`; `end - start` is the burst
/// executed during this dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Dispatched process ID.
    pub id: String,
    /// Dispatch start time.
    pub start: i64,
    /// Dispatch end time.
    pub end: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Executed time (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two intervals share any instant of `[start, end)`.
    #[inline]
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Ordered sequence of execution intervals from one scheduling run.
///
/// Intervals are kept in non-decreasing `start` order. A timeline is
/// built by the scheduler engine and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a timeline from intervals, sorting them by start time.
    pub fn from_intervals(mut intervals: Vec<ExecutionInterval>) -> Self {
        intervals.sort_by_key(|iv| iv.start);
        Self { intervals }
    }

    /// Appends an interval. Engine-internal: callers receive finished timelines.
    pub(crate) fn push(&mut self, interval: ExecutionInterval) {
        debug_assert!(
            self.intervals
                .last()
                .map_or(true, |last| last.start <= interval.start),
            "timeline intervals must be appended in start order"
        );
        self.intervals.push(interval);
    }

    /// All intervals in start order.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Iterates intervals in start order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the timeline has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Makespan: latest end time, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|iv| iv.end).max().unwrap_or(0)
    }

    /// Total time the CPU spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|iv| iv.duration()).sum()
    }

    /// Time between 0 and makespan with no process running.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// CPU utilization: busy_time / makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Returns all intervals for a given process.
    pub fn intervals_for(&self, id: &str) -> Vec<&ExecutionInterval> {
        self.intervals.iter().filter(|iv| iv.id == id).collect()
    }

    /// Total time executed by a given process.
    pub fn executed(&self, id: &str) -> i64 {
        self.intervals
            .iter()
            .filter(|iv| iv.id == id)
            .map(|iv| iv.duration())
            .sum()
    }

    /// Completion time: end of the process's last interval.
    ///
    /// Scans from the back, so the first match is the latest dispatch.
    pub fn completion_time(&self, id: &str) -> Option<i64> {
        self.intervals
            .iter()
            .rev()
            .find(|iv| iv.id == id)
            .map(|iv| iv.end)
    }

    /// Start of the process's first interval.
    pub fn first_start(&self, id: &str) -> Option<i64> {
        self.intervals
            .iter()
            .find(|iv| iv.id == id)
            .map(|iv| iv.start)
    }

    /// Merges back-to-back intervals of the same process.
    ///
    /// Round-robin emits one interval per quantum slice; when a process is
    /// re-dispatched immediately the slices touch and render as one block.
    pub fn coalesced(&self) -> Timeline {
        let mut merged: Vec<ExecutionInterval> = Vec::with_capacity(self.intervals.len());
        for iv in &self.intervals {
            match merged.last_mut() {
                Some(last) if last.id == iv.id && last.end == iv.start => last.end = iv.end,
                _ => merged.push(iv.clone()),
            }
        }
        Timeline { intervals: merged }
    }

    /// Idle ranges `[start, end)` between t=0 and the makespan.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for iv in &self.intervals {
            if iv.start > cursor {
                gaps.push((cursor, iv.start));
            }
            cursor = cursor.max(iv.end);
        }
        gaps
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
