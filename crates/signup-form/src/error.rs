// File: src/error.rs
// Purpose: Violations, the collected validation failure, and change-handler errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::Field;

/// A failed rule: which field, and the message to show next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

impl Violation {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every violation found in one validation pass, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("form failed validation with {} violation(s)", .violations.len())]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Messages reported for `field`, in evaluation order
    pub fn messages_for(&self, field: Field) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.message.as_str())
            .collect()
    }
}

/// Misuse of the change handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field `{0}` does not hold a single value")]
    NotScalar(Field),

    #[error("invalid gender: {0:?} (expected male, female or other)")]
    InvalidGender(String),
}
