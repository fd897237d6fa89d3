// File: src/field.rs
// Purpose: Closed set of form field names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// A field of the signup form.
///
/// Ordering follows the on-screen layout, which is also the order the rule
/// set evaluates fields in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
    Age,
    Gender,
    Interests,
    BirthDate,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::Password,
        Field::ConfirmPassword,
        Field::Age,
        Field::Gender,
        Field::Interests,
        Field::BirthDate,
    ];

    /// Wire name used by inputs and serialized state
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Interests => "interests",
            Field::BirthDate => "birthDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Interests => "Interests",
            Field::BirthDate => "Date of Birth",
        }
    }

    /// Whether the field holds a single text value (everything but interests)
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Field::Interests)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
