// File: src/rules.rs
// Purpose: Per-field validation rules evaluated on submit

use signup_validation::{
    coerce_number, equals, is_digits_exact, is_present, is_valid_date, is_valid_email,
    validate_max, validate_min, validate_min_items, PasswordPolicy,
};

use crate::config::FormConfig;
use crate::error::{ValidationErrors, Violation};
use crate::field::Field;
use crate::state::FormState;

type FieldRule = fn(&RuleSet, &FormState) -> Vec<String>;

/// Evaluation order. `gender` carries no rule.
const FIELD_RULES: &[(Field, FieldRule)] = &[
    (Field::FirstName, RuleSet::first_name),
    (Field::LastName, RuleSet::last_name),
    (Field::Email, RuleSet::email),
    (Field::PhoneNumber, RuleSet::phone_number),
    (Field::Password, RuleSet::password),
    (Field::ConfirmPassword, RuleSet::confirm_password),
    (Field::Age, RuleSet::age),
    (Field::Interests, RuleSet::interests),
    (Field::BirthDate, RuleSet::birth_date),
];

/// The configured rules of the signup form.
///
/// Every field is checked on every pass, and within a field every check
/// runs, except where one check gates the rest (a non-numeric age skips the
/// range checks, a password mismatch skips the presence check).
#[derive(Debug, Clone)]
pub struct RuleSet {
    password_policy: PasswordPolicy,
    age_min: u32,
    age_max: u32,
    phone_digits: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

impl RuleSet {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            password_policy: PasswordPolicy::new(
                config.password.min_length,
                config.password.symbols.clone(),
            ),
            age_min: config.age.min,
            age_max: config.age.max,
            phone_digits: config.phone.digits,
        }
    }

    /// Every violation in `state`, in field order
    pub fn check(&self, state: &FormState) -> Vec<Violation> {
        FIELD_RULES
            .iter()
            .flat_map(|(field, rule)| {
                rule(self, state)
                    .into_iter()
                    .map(move |message| Violation::new(*field, message))
            })
            .collect()
    }

    /// Messages for a single field, in evaluation order
    pub fn check_field(&self, field: Field, state: &FormState) -> Vec<String> {
        FIELD_RULES
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rule)| rule(self, state))
            .unwrap_or_default()
    }

    pub fn validate(&self, state: &FormState) -> Result<(), ValidationErrors> {
        let violations = self.check(state);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(violations))
        }
    }

    fn first_name(&self, state: &FormState) -> Vec<String> {
        required(&state.first_name, "First Name is Required")
    }

    fn last_name(&self, state: &FormState) -> Vec<String> {
        required(&state.last_name, "Last Name is Required")
    }

    fn email(&self, state: &FormState) -> Vec<String> {
        let mut messages = required(&state.email, "Email is Required");
        // format is only judged once something was typed
        if is_present(&state.email) && !is_valid_email(&state.email) {
            messages.push("Invalid email format".to_string());
        }
        messages
    }

    fn phone_number(&self, state: &FormState) -> Vec<String> {
        let mut messages = Vec::new();
        if !is_digits_exact(&state.phone_number, self.phone_digits) {
            messages.push(format!("Phone Number must be {} digits", self.phone_digits));
        }
        messages.extend(required(
            &state.phone_number,
            "phoneNumber is a required field",
        ));
        messages
    }

    fn password(&self, state: &FormState) -> Vec<String> {
        self.password_policy
            .check(&state.password)
            .iter()
            .map(|issue| issue.message())
            .collect()
    }

    fn confirm_password(&self, state: &FormState) -> Vec<String> {
        if !equals(&state.confirm_password, &state.password) {
            return vec!["Passwords must match".to_string()];
        }
        required(&state.confirm_password, "Confirm password is required")
    }

    fn age(&self, state: &FormState) -> Vec<String> {
        let Some(age) = coerce_number(&state.age) else {
            return vec!["Age must be a number".to_string()];
        };

        let mut messages = Vec::new();
        if validate_min(age, f64::from(self.age_min)).is_err() {
            messages.push(format!("You must be at least {} years old", self.age_min));
        }
        if validate_max(age, f64::from(self.age_max)).is_err() {
            messages.push(format!("You cannot be older than {} years", self.age_max));
        }
        messages
    }

    fn interests(&self, state: &FormState) -> Vec<String> {
        match validate_min_items(&state.interests, 1) {
            Ok(()) => Vec::new(),
            Err(_) => vec!["Select at least one interest".to_string()],
        }
    }

    fn birth_date(&self, state: &FormState) -> Vec<String> {
        if !is_present(&state.birth_date) {
            return vec!["Date of birth is required".to_string()];
        }
        if !is_valid_date(&state.birth_date) {
            return vec!["Date of birth must be a valid date".to_string()];
        }
        Vec::new()
    }
}

fn required(value: &str, message: &str) -> Vec<String> {
    if is_present(value) {
        Vec::new()
    } else {
        vec![message.to_string()]
    }
}
