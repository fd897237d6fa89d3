// File: src/controller.rs
// Purpose: Owns the form model and turns user events into state changes and submit events

use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::error::{FormError, ValidationErrors};
use crate::field::Field;
use crate::reducer::{reconcile_errors, reduce, FormAction, FormModel};
use crate::rules::RuleSet;
use crate::state::{ErrorState, FormState};

/// Called with the submitted values after a submit passes validation
pub type SubmitListener = Box<dyn FnMut(&FormState)>;

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// The signup form: values, errors, the password visibility flag, and the
/// listeners interested in successful submits.
///
/// Single-threaded; every handler runs to completion.
pub struct FormController {
    model: FormModel,
    rules: RuleSet,
    config: FormConfig,
    listeners: Vec<SubmitListener>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    pub fn with_config(config: FormConfig) -> Self {
        Self {
            model: FormModel::default(),
            rules: RuleSet::from_config(&config),
            config,
            listeners: Vec::new(),
        }
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn values(&self) -> &FormState {
        &self.model.values
    }

    pub fn errors(&self) -> &ErrorState {
        &self.model.errors
    }

    pub fn show_password(&self) -> bool {
        self.model.show_password
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Register a callback for successful submits
    pub fn on_submit(&mut self, listener: impl FnMut(&FormState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Route an action. Returns the submit outcome for `Submit`, `None`
    /// otherwise.
    pub fn dispatch(&mut self, action: FormAction) -> Result<Option<SubmitOutcome>, FormError> {
        if action == FormAction::Submit {
            return Ok(Some(self.submit()));
        }

        self.model = reduce(&self.model, action, &self.rules)?;
        Ok(None)
    }

    /// Change handler: set a field by its input name
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.dispatch(FormAction::SetField {
            field,
            value: value.into(),
        })?;
        debug!(field = %field, "field changed");
        Ok(())
    }

    /// Checkbox handler for the interests group
    pub fn toggle_interest(&mut self, tag: &str, checked: bool) {
        self.apply(FormAction::ToggleInterest {
            tag: tag.to_string(),
            checked,
        });
        debug!(tag, checked, "interest toggled");
    }

    pub fn toggle_password_visibility(&mut self) {
        self.apply(FormAction::TogglePasswordVisibility);
        debug!(visible = self.model.show_password, "password visibility toggled");
    }

    // For actions that cannot fail.
    fn apply(&mut self, action: FormAction) {
        if let Err(err) = self.dispatch(action) {
            warn!(error = %err, "form action rejected");
        }
    }

    /// Validate every field and reconcile the error record.
    ///
    /// On success the error record is cleared and every listener receives
    /// the submitted values.
    pub fn submit(&mut self) -> SubmitOutcome {
        let violations = self.rules.check(&self.model.values);
        let previous = std::mem::take(&mut self.model.errors);
        self.model.errors = reconcile_errors(previous, &violations);

        if !violations.is_empty() {
            debug!(
                violations = violations.len(),
                fields = self.model.errors.len(),
                "form submit rejected"
            );
            return SubmitOutcome::Rejected(ValidationErrors::new(violations));
        }

        info!(
            interests = self.model.values.interests.len(),
            listeners = self.listeners.len(),
            "form submitted"
        );
        for listener in &mut self.listeners {
            listener(&self.model.values);
        }
        SubmitOutcome::Submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn filled() -> FormController {
        let mut form = FormController::new();
        let sample = FormState::sample();
        for field in Field::ALL.iter().filter(|f| f.is_scalar()) {
            let value = sample.get_value(*field).unwrap_or_default().to_string();
            form.set_field(field.name(), value).unwrap();
        }
        for tag in &sample.interests {
            form.toggle_interest(tag, true);
        }
        form
    }

    #[test]
    fn test_filled_form_matches_sample() {
        assert_eq!(filled().values(), &FormState::sample());
    }

    #[test]
    fn test_unknown_field_name() {
        let mut form = FormController::new();
        assert_eq!(
            form.set_field("nickname", "Q"),
            Err(FormError::UnknownField("nickname".to_string()))
        );
    }

    #[test]
    fn test_change_does_not_touch_errors() {
        let mut form = FormController::new();
        form.submit();
        let errors_before = form.errors().clone();

        form.set_field("firstName", "Quan").unwrap();
        assert_eq!(form.errors(), &errors_before);
    }

    #[test]
    fn test_submit_notifies_listeners_once_valid() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut form = FormController::new();
        form.on_submit(move |values| sink.borrow_mut().push(values.first_name.clone()));

        assert!(!form.submit().is_submitted());
        assert!(seen.borrow().is_empty());

        let mut form_valid = filled();
        let sink = Rc::clone(&seen);
        form_valid.on_submit(move |values| sink.borrow_mut().push(values.first_name.clone()));
        assert_eq!(form_valid.submit(), SubmitOutcome::Submitted);
        assert_eq!(*seen.borrow(), vec!["Quan".to_string()]);
    }

    #[test]
    fn test_handlers_match_reducer() {
        let rules = RuleSet::default();
        let mut form = FormController::new();
        let mut expected = FormModel::default();

        form.set_field("age", "42").unwrap();
        form.toggle_interest("sports", true);
        form.toggle_interest("coding", true);
        form.toggle_interest("sports", false);
        form.toggle_password_visibility();

        for action in [
            FormAction::SetField {
                field: Field::Age,
                value: "42".to_string(),
            },
            FormAction::ToggleInterest {
                tag: "sports".to_string(),
                checked: true,
            },
            FormAction::ToggleInterest {
                tag: "coding".to_string(),
                checked: true,
            },
            FormAction::ToggleInterest {
                tag: "sports".to_string(),
                checked: false,
            },
            FormAction::TogglePasswordVisibility,
        ] {
            expected = reduce(&expected, action, &rules).unwrap();
        }

        assert_eq!(form.model(), &expected);
        assert_eq!(form.values().interests, vec!["coding"]);
        assert!(form.show_password());
    }

    #[test]
    fn test_dispatch_routes_submit() {
        let mut form = FormController::new();
        let outcome = form.dispatch(FormAction::Submit).unwrap();
        assert!(matches!(outcome, Some(SubmitOutcome::Rejected(_))));

        let outcome = form
            .dispatch(FormAction::TogglePasswordVisibility)
            .unwrap();
        assert_eq!(outcome, None);
        assert!(form.show_password());
    }
}
