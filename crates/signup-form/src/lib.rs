//! # signup-form
//!
//! State and validation for a signup form: ten fields, per-field messages,
//! a shared password visibility flag, and a submit event for the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use signup_form::{Field, FormController};
//!
//! let mut form = FormController::new();
//! form.on_submit(|values| println!("welcome, {}", values.first_name));
//!
//! form.set_field("firstName", "Quan").unwrap();
//! form.toggle_interest("coding", true);
//!
//! let outcome = form.submit();
//! assert!(!outcome.is_submitted());
//! assert!(form.errors().has_error(Field::LastName));
//! assert!(!form.errors().has_error(Field::FirstName));
//! ```
//!
//! ## Architecture
//!
//! - [`FormState`] / [`ErrorState`] - the two state records
//! - [`RuleSet`] - ordered per-field rules, configured from [`FormConfig`]
//! - [`reduce`] - pure `(model, action) -> model` transitions
//! - [`FormController`] - owns the model and notifies submit listeners
//! - [`SignupRecord`] - typed values parsed from a valid form
//!
//! The validator functions themselves live in `signup-validation`.

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod record;
pub mod reducer;
pub mod rules;
pub mod state;

pub use config::FormConfig;
pub use controller::{FormController, SubmitListener, SubmitOutcome};
pub use error::{FormError, ValidationErrors, Violation};
pub use field::Field;
pub use record::{EmailAddress, PhoneNumber, SignupRecord};
pub use reducer::{reconcile_errors, reduce, FormAction, FormModel};
pub use rules::RuleSet;
pub use state::{ErrorState, FormState, Gender};

/// Types that can be checked against the default rule set
pub trait Validate {
    /// Validate and return every violation in evaluation order
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for FormState {
    fn validate(&self) -> Result<(), ValidationErrors> {
        RuleSet::default().validate(self)
    }
}
