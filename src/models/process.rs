//! Process model.
//!
//! A process is the unit of work handed to the scheduler: an identifier,
//! the instant it becomes runnable, the CPU time it needs, and a priority
//! used by the priority policy.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Priority assigned when the caller does not supply one.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A process to be scheduled on a single CPU.
///
/// Immutable once a simulation starts; every policy works on its own
/// copies of the mutable state (remaining burst, completion flags).
///
/// # Time Representation
/// All times are integer time units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier. Must be unique within a registry.
    pub id: String,
    /// Time the process becomes runnable (>= 0).
    pub arrival: i64,
    /// Total CPU time required (>= 1).
    pub burst: i64,
    /// Scheduling priority (lower = more urgent).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl Process {
    /// Creates a process arriving at t=0 with the default priority.
    pub fn new(id: impl Into<String>, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival: 0,
            burst,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival <= clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 5).with_arrival(3).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 5);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_process_defaults() {
        let p = Process::new("P1", 1);
        assert_eq!(p.arrival, 0);
        assert_eq!(p.priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new("P1", 1).with_arrival(4);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_priority_defaults_when_missing() {
        let p: Process =
            serde_json::from_str(r#"{"id":"P1","arrival":0,"burst":3}"#).unwrap();
        assert_eq!(p.priority, DEFAULT_PRIORITY);
    }
}
