//! Errors raised before a scheduling run starts.
//!
//! Every failure is detected up front: a run either completes or is
//! rejected without producing any partial result.

use std::fmt;

use crate::models::Time;
use crate::validation::ValidationError;

/// Why a scheduling run was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The process list failed validation.
    InvalidInput(Vec<ValidationError>),
    /// Priority scheduling was requested without a priority for this process.
    MissingPriority {
        /// Process lacking a priority.
        process_id: String,
    },
    /// Round robin was requested without a time quantum.
    MissingQuantum,
    /// Round robin was requested with a non-positive time quantum.
    InvalidQuantum(Time),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidInput(errors) => {
                write!(f, "invalid process list: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            ScheduleError::MissingPriority { process_id } => {
                write!(f, "no priority supplied for process '{process_id}'")
            }
            ScheduleError::MissingQuantum => write!(f, "no time quantum supplied"),
            ScheduleError::InvalidQuantum(q) => {
                write!(f, "time quantum must be positive, got {q}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}
