//! Scheduler engine and metrics.
//!
//! One scheduler per dispatch policy, each consuming a process registry
//! and producing a [`Timeline`](crate::models::Timeline). Metrics are
//! derived from the timeline afterwards.
//!
//! # Policies
//!
//! | Policy | Scheduler | Preemptive |
//! |--------|-----------|------------|
//! | FCFS | `FcfsScheduler` | no |
//! | SJF | `NonPreemptiveScheduler::shortest_job_first` | no |
//! | Priority | `NonPreemptiveScheduler::priority` | no |
//! | HRRN | `NonPreemptiveScheduler::highest_response_ratio` | no |
//! | Round Robin | `RoundRobinScheduler` | yes (quantum) |
//!
//! All policies model a single CPU-bound processor with integer time.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod budget;
mod fcfs;
mod metrics;
mod non_preemptive;
mod round_robin;
mod simulation;
mod summary;

pub use fcfs::{fcfs, FcfsScheduler};
pub use metrics::{compute_metrics, MetricsRecord};
pub use non_preemptive::{hrrn, priority, sjf, NonPreemptiveScheduler};
pub use round_robin::{round_robin, RoundRobinScheduler};
pub use simulation::{simulate, simulate_all, SimulationReport, SimulationRequest};
pub use summary::MetricsSummary;
