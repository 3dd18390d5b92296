//! CPU scheduling domain models.
//!
//! Provides the data types exchanged between the caller, the scheduler
//! engine, and the metrics calculator.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Immutable input record (registry entry) |
//! | `ExecutionInterval` | One dispatch `[start, end)` of a process |
//! | `Timeline` | Ordered dispatch record of one policy run |
//! | `SimulationConfig` | Policy selector + quantum + step cap |

mod config;
mod process;
mod timeline;

pub use config::{Policy, SimulationConfig};
pub use process::{Process, DEFAULT_PRIORITY};
pub use timeline::{ExecutionInterval, Timeline};
