// File: src/reducer.rs
// Purpose: Pure (state, action) -> state transitions for the form

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Violation};
use crate::field::Field;
use crate::rules::RuleSet;
use crate::state::{ErrorState, FormState};

/// Everything the form renders from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormModel {
    pub values: FormState,
    pub errors: ErrorState,
    /// One flag for both the password and the confirm-password input
    pub show_password: bool,
}

/// A user interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormAction {
    SetField { field: Field, value: String },
    ToggleInterest { tag: String, checked: bool },
    TogglePasswordVisibility,
    Submit,
}

/// Apply `action` to `model`.
///
/// Change actions never validate. `Submit` recomputes the error record from
/// scratch. On error the input model is left as it was.
pub fn reduce(model: &FormModel, action: FormAction, rules: &RuleSet) -> Result<FormModel, FormError> {
    let mut next = model.clone();

    match action {
        FormAction::SetField { field, value } => next.values.set_field(field, value)?,
        FormAction::ToggleInterest { tag, checked } => {
            next.values.toggle_interest(&tag, checked);
        }
        FormAction::TogglePasswordVisibility => next.show_password = !next.show_password,
        FormAction::Submit => {
            let violations = rules.check(&next.values);
            next.errors = reconcile_errors(next.errors, &violations);
        }
    }

    Ok(next)
}

/// New error record after a validation pass: cleared on success, otherwise
/// exactly the reported violations (last message per field).
pub fn reconcile_errors(mut errors: ErrorState, violations: &[Violation]) -> ErrorState {
    if violations.is_empty() {
        errors.clear();
    } else {
        errors.reconcile(violations);
    }
    errors
}
