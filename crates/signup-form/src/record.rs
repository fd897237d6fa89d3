// File: src/record.rs
// Purpose: Typed signup record produced from a FormState that passed validation

use chrono::NaiveDate;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use signup_validation::{coerce_number, is_valid_email, parse_date};

use crate::error::{ValidationErrors, Violation};
use crate::field::Field;
use crate::rules::RuleSet;
use crate::state::{FormState, Gender};

/// Email address in a syntactically valid form
#[nutype(
    validate(predicate = is_valid_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// Phone number made of ASCII digits only
#[nutype(
    validate(predicate = is_digit_string),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PhoneNumber(String);

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A submitted signup with every text field coerced to its real type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone_number: PhoneNumber,
    pub password: String,
    pub age: f64,
    pub gender: Option<Gender>,
    pub interests: Vec<String>,
    pub birth_date: NaiveDate,
}

impl FormState {
    /// Validate with `rules`, then convert into a [`SignupRecord`].
    pub fn parse(&self, rules: &RuleSet) -> Result<SignupRecord, ValidationErrors> {
        rules.validate(self)?;

        let email = EmailAddress::try_new(self.email.clone())
            .map_err(|_| rejected(Field::Email, "Invalid email format"))?;
        let phone_number = PhoneNumber::try_new(self.phone_number.clone())
            .map_err(|_| rejected(Field::PhoneNumber, "Phone Number must contain digits only"))?;
        let age = coerce_number(&self.age).ok_or_else(|| rejected(Field::Age, "Age must be a number"))?;
        let birth_date = parse_date(&self.birth_date)
            .ok_or_else(|| rejected(Field::BirthDate, "Date of birth must be a valid date"))?;

        Ok(SignupRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email,
            phone_number,
            password: self.password.clone(),
            age,
            gender: self.gender,
            interests: self.interests.clone(),
            birth_date,
        })
    }
}

fn rejected(field: Field, message: &str) -> ValidationErrors {
    ValidationErrors::new(vec![Violation::new(field, message)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample() {
        let record = FormState::sample().parse(&RuleSet::default()).unwrap();

        assert_eq!(record.email.to_string(), "cobham@example.com");
        assert_eq!(record.phone_number.to_string(), "1231234218");
        assert_eq!(record.age, 18.0);
        assert_eq!(record.gender, Some(Gender::Male));
        assert_eq!(record.birth_date, NaiveDate::from_ymd_opt(2024, 2, 12).unwrap());
    }

    #[test]
    fn test_parse_coerces_age_text() {
        let mut state = FormState::sample();
        state.age = " 42.5 ".to_string();
        let record = state.parse(&RuleSet::default()).unwrap();
        assert_eq!(record.age, 42.5);
    }

    #[test]
    fn test_parse_rejects_invalid_form() {
        let mut state = FormState::sample();
        state.first_name.clear();
        state.age = "abc".to_string();

        let errors = state.parse(&RuleSet::default()).unwrap_err();
        assert_eq!(errors.messages_for(Field::FirstName), vec!["First Name is Required"]);
        assert_eq!(errors.messages_for(Field::Age), vec!["Age must be a number"]);
    }

    #[test]
    fn test_email_newtype() {
        assert!(EmailAddress::try_new("user@example.com".to_string()).is_ok());
        assert!(EmailAddress::try_new("user@".to_string()).is_err());
    }

    #[test]
    fn test_phone_newtype() {
        assert!(PhoneNumber::try_new("0123456789".to_string()).is_ok());
        assert!(PhoneNumber::try_new("".to_string()).is_err());
        assert!(PhoneNumber::try_new("555-0100".to_string()).is_err());
    }

    #[test]
    fn test_record_serializes_typed_fields() {
        let record = FormState::sample().parse(&RuleSet::default()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["birthDate"], "2024-02-12");
        assert_eq!(json["phoneNumber"], "1231234218");
        assert_eq!(json["age"], 18.0);
    }
}
