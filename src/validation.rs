//! Configuration validation.
//!
//! Checks a process set and policy before a run starts. Detects:
//! - Empty process sets
//! - Zero-duration processes
//! - Duplicate process ids
//! - A zero round-robin quantum
//!
//! Runtime precondition violations (stepping after completion, a driver
//! tick racing the completion check) are not errors: the engine treats
//! them as no-ops reporting current state.

use crate::models::{Policy, ProcessSet};
use std::collections::HashSet;

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

/// Categories of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process set contains no processes.
    EmptyProcessSet,
    /// A process requires zero service time.
    ZeroDuration,
    /// Two processes share the same id.
    DuplicateId,
    /// Round-robin configured with a zero quantum.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation configuration.
///
/// Checks:
/// 1. At least one process
/// 2. Every process has a positive duration
/// 3. No duplicate process ids
/// 4. A positive quantum when the policy is round-robin
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(processes: &ProcessSet, policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "process set is empty",
        ));
    }

    let mut seen = HashSet::new();
    for p in processes.processes() {
        if p.needed_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("process {} needs zero service time", p.id),
            ));
        }
        if !seen.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process id: {}", p.id),
            ));
        }
    }

    if let Some(0) = policy.quantum() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "round-robin quantum must be positive",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
