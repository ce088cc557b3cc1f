//! Input validation for process lists.
//!
//! Checks structural integrity of the process records before any
//! algorithm runs. Detects:
//! - Empty process IDs
//! - Duplicate process IDs
//! - Zero burst times
//! - Time horizons that do not fit in [`Time`](crate::models::Time)
//!
//! Negative times are ruled out by the unsigned [`Time`](crate::models::Time)
//! type and need no runtime check.

use crate::models::{ProcessRecord, Time};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty (or whitespace-only) ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires no CPU time.
    ZeroBurst,
    /// The latest arrival plus the total burst exceeds the representable time.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. Every process has a non-blank ID
/// 2. No two processes share an ID
/// 3. Every burst time is positive
/// 4. `max(arrival) + sum(burst)` fits in [`Time`], so no clock value a
///    schedule can reach overflows
///
/// An empty list is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (position, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {position} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has a zero burst time", p.id),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every completion time, or `None` on overflow.
///
/// The clock only idles up to an arrival and otherwise advances by burst
/// work, so no schedule runs past the latest arrival plus the total burst.
fn horizon(processes: &[ProcessRecord]) -> Option<Time> {
    let latest = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst))
}
