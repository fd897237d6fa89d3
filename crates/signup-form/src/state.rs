// File: src/state.rs
// Purpose: Field values (FormState) and per-field messages (ErrorState)

use serde::{Deserialize, Serialize};
use signup_validation::{insert_unique, remove_all};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{FormError, Violation};
use crate::field::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| FormError::InvalidGender(s.to_string()))
    }
}

/// The live record of every field value being edited.
///
/// Text fields hold exactly what the input holds; coercion (age, birth date)
/// happens during validation and [`FormState::parse`](crate::FormState::parse).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub gender: Option<Gender>,
    /// Checked interest tags, in the order they were checked
    pub interests: Vec<String>,
    pub birth_date: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo payload that satisfies every rule
    pub fn sample() -> Self {
        Self {
            first_name: "Quan".to_string(),
            last_name: "AP".to_string(),
            email: "cobham@example.com".to_string(),
            phone_number: "1231234218".to_string(),
            password: "123456Qq*".to_string(),
            confirm_password: "123456Qq*".to_string(),
            age: "18".to_string(),
            gender: Some(Gender::Male),
            interests: vec!["coding".to_string()],
            birth_date: "2024-02-12".to_string(),
        }
    }

    /// Write a scalar field.
    ///
    /// For `gender` an empty value clears the selection; anything outside
    /// male/female/other is rejected. `interests` is not scalar, use
    /// [`toggle_interest`](Self::toggle_interest).
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::Age => self.age = value,
            Field::BirthDate => self.birth_date = value,
            Field::Gender => {
                self.gender = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            Field::Interests => return Err(FormError::NotScalar(field)),
        }
        Ok(())
    }

    /// Current value of a scalar field; `None` for `interests`
    pub fn get_value(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Age => &self.age,
            Field::BirthDate => &self.birth_date,
            Field::Gender => return Some(self.gender.map_or("", |g| g.as_str())),
            Field::Interests => return None,
        };
        Some(value.as_str())
    }

    /// Check or uncheck an interest tag. Checking a present tag is a no-op.
    ///
    /// Returns `true` when the set changed.
    pub fn toggle_interest(&mut self, tag: &str, checked: bool) -> bool {
        if checked {
            insert_unique(&mut self.interests, tag.to_string())
        } else {
            remove_all(&mut self.interests, &tag.to_string())
        }
    }

    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|i| i == tag)
    }
}

/// The live record of per-field failure messages.
///
/// A key is present only while its field fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorState {
    errors: BTreeMap<Field, String>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One message per field; a later violation for the same field
    /// overwrites an earlier one.
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut errors = BTreeMap::new();
        for violation in violations {
            errors.insert(violation.field, violation.message.clone());
        }
        Self { errors }
    }

    /// Bring the record in line with a fresh validation pass.
    ///
    /// Keys the new pass did not report are dropped, then the new messages
    /// are laid over what remains. The result always equals
    /// `ErrorState::from_violations(violations)`.
    pub fn reconcile(&mut self, violations: &[Violation]) {
        let fresh = Self::from_violations(violations);
        self.errors.retain(|field, _| fresh.errors.contains_key(field));
        self.errors.extend(fresh.errors);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Check if field has an error
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Get error message for a field
    pub fn get_error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_scalar_fields() {
        let mut state = FormState::new();
        state.set_field(Field::FirstName, "Quan").unwrap();
        state.set_field(Field::Age, "42").unwrap();

        assert_eq!(state.first_name, "Quan");
        assert_eq!(state.get_value(Field::Age), Some("42"));
    }

    #[test]
    fn test_set_gender() {
        let mut state = FormState::new();
        state.set_field(Field::Gender, "female").unwrap();
        assert_eq!(state.gender, Some(Gender::Female));

        state.set_field(Field::Gender, "").unwrap();
        assert_eq!(state.gender, None);

        assert_eq!(
            state.set_field(Field::Gender, "robot"),
            Err(FormError::InvalidGender("robot".to_string()))
        );
        assert_eq!(state.gender, None);
    }

    #[test]
    fn test_every_gender_option_is_settable() {
        let mut state = FormState::new();
        for gender in Gender::ALL {
            state.set_field(Field::Gender, gender.as_str()).unwrap();
            assert_eq!(state.gender, Some(gender));
        }
    }

    #[test]
    fn test_interests_not_scalar() {
        let mut state = FormState::new();
        assert_eq!(
            state.set_field(Field::Interests, "coding"),
            Err(FormError::NotScalar(Field::Interests))
        );
        assert_eq!(state.get_value(Field::Interests), None);
    }

    #[test]
    fn test_toggle_interest_is_idempotent() {
        let mut state = FormState::new();
        assert!(state.toggle_interest("coding", true));
        assert!(!state.toggle_interest("coding", true));
        assert_eq!(state.interests, vec!["coding"]);

        assert!(state.toggle_interest("coding", false));
        assert!(!state.toggle_interest("coding", false));
        assert!(state.interests.is_empty());
    }

    #[test]
    fn test_toggle_round_trip_restores_set() {
        let mut state = FormState::sample();
        let before = state.interests.clone();

        state.toggle_interest("sports", true);
        assert!(state.has_interest("sports"));
        state.toggle_interest("sports", false);

        assert_eq!(state.interests, before);
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let json = serde_json::to_value(FormState::sample()).unwrap();
        assert_eq!(json["firstName"], "Quan");
        assert_eq!(json["confirmPassword"], "123456Qq*");
        assert_eq!(json["gender"], "male");
        assert_eq!(json["interests"], serde_json::json!(["coding"]));
    }

    #[test]
    fn test_state_deserializes_partial() {
        let state: FormState =
            serde_json::from_str(r#"{"firstName":"Quan","interests":["reading"]}"#).unwrap();
        assert_eq!(state.first_name, "Quan");
        assert_eq!(state.interests, vec!["reading"]);
        assert_eq!(state.email, "");
    }

    #[test]
    fn test_error_state_last_violation_wins() {
        let errors = ErrorState::from_violations(&[
            Violation::new(Field::Password, "first"),
            Violation::new(Field::Email, "bad email"),
            Violation::new(Field::Password, "second"),
        ]);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get_error(Field::Password), Some("second"));
    }

    #[test]
    fn test_reconcile_drops_stale_entries() {
        let mut errors = ErrorState::from_violations(&[
            Violation::new(Field::FirstName, "First Name is Required"),
            Violation::new(Field::Age, "Age must be a number"),
        ]);

        let fresh = [Violation::new(Field::Age, "You must be at least 18 years old")];
        errors.reconcile(&fresh);

        assert_eq!(errors, ErrorState::from_violations(&fresh));
        assert!(!errors.has_error(Field::FirstName));
    }

    #[test]
    fn test_error_state_serializes_as_map() {
        let errors = ErrorState::from_violations(&[Violation::new(
            Field::BirthDate,
            "Date of birth is required",
        )]);
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"birthDate":"Date of birth is required"}"#);
    }
}
