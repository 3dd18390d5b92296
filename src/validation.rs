//! Input validation for process registries.
//!
//! Checks the preconditions the scheduler engine relies on before any
//! simulation work begins. Detects:
//! - Empty process IDs
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive bursts
//!
//! All problems are collected, so a caller can report every bad row at once.

use crate::error::SimulationError;
use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process ID.
    pub process_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty (or whitespace-only) ID.
    EmptyId,
    /// Arrival time is negative.
    NegativeArrival,
    /// Burst is zero or negative.
    NonPositiveBurst,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        process_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            process_id: process_id.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for SimulationError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ValidationErrorKind::DuplicateId => SimulationError::DuplicateProcessId(err.process_id),
            _ => SimulationError::InvalidProcess {
                id: err.process_id,
                reason: err.message,
            },
        }
    }
}

/// Validates a process registry.
///
/// Checks:
/// 1. Every ID is non-empty
/// 2. No duplicate IDs
/// 3. `arrival >= 0`
/// 4. `burst >= 1`
///
/// An empty registry is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                p.id.as_str(),
                "Process ID is empty",
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                p.id.as_str(),
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                p.id.as_str(),
                format!("arrival must be >= 0, got {}", p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                p.id.as_str(),
                format!("burst must be >= 1, got {}", p.burst),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a registry and converts the first problem into a `SimulationError`.
pub(crate) fn ensure_valid(processes: &[Process]) -> Result<(), SimulationError> {
    validate_processes(processes).map_err(|errors| {
        errors
            .into_iter()
            .next()
            .map(SimulationError::from)
            .unwrap_or_else(|| SimulationError::invalid_config("invalid process registry"))
    })
}
