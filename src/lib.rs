//! CPU scheduling simulator.
//!
//! Simulates single-processor dispatch policies over a fixed set of
//! processes and reports, per policy, the execution timeline and
//! per-process completion, turnaround and waiting times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionInterval`, `Timeline`,
//!   `Policy`, `SimulationConfig`
//! - **`dispatching`**: Selection rules (SJF, Priority, HRRN) and the rule engine
//! - **`scheduler`**: FCFS, non-preemptive and round-robin schedulers,
//!   metrics, and the `simulate` entry points
//! - **`validation`**: Registry checks (duplicate IDs, bursts, arrivals)
//! - **`workload`**: Seeded random registry generation
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::{Process, SimulationConfig};
//! use cpu_schedule::scheduler::simulate;
//!
//! let processes = vec![
//!     Process::new("P1", 5),
//!     Process::new("P2", 3).with_arrival(1),
//! ];
//! let report = simulate(&processes, &SimulationConfig::round_robin(2)).unwrap();
//! assert_eq!(report.record_for("P2").unwrap().ct, 7);
//! ```
//!
//! # Logging
//!
//! Emits `debug`/`trace` records through the `log` facade; install any
//! logger to see dispatch decisions.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SimulationError, SimulationResult};
