//! Password validation functions

use crate::string::text_len;

/// Symbols accepted by the default strength policy.
pub const DEFAULT_SYMBOLS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

/// A single unmet password requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIssue {
    Missing,
    TooShort(usize),
    NoSymbol,
    NoDigit,
    NoUppercase,
    NoLowercase,
}

impl PasswordIssue {
    pub fn message(&self) -> String {
        match self {
            PasswordIssue::Missing => "Password is required".to_string(),
            PasswordIssue::TooShort(min) => {
                format!("Password must be at least {} characters", min)
            }
            PasswordIssue::NoSymbol => "Password must contain at least one symbol".to_string(),
            PasswordIssue::NoDigit => "Password must contain at least one number".to_string(),
            PasswordIssue::NoUppercase => {
                "Password must contain at least one uppercase letter".to_string()
            }
            PasswordIssue::NoLowercase => {
                "Password must contain at least one lowercase letter".to_string()
            }
        }
    }
}

/// Strength policy: minimum length plus one character from each class.
///
/// Length is measured in UTF-16 code units. Letter and digit classes are
/// ASCII only (`A-Z`, `a-z`, `0-9`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub symbols: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            symbols: DEFAULT_SYMBOLS.to_string(),
        }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize, symbols: impl Into<String>) -> Self {
        Self {
            min_length,
            symbols: symbols.into(),
        }
    }

    /// Every unmet requirement, in a fixed order: presence, length, symbol,
    /// digit, uppercase, lowercase.
    ///
    /// Checks do not short-circuit, so an empty password reports all six.
    pub fn check(&self, password: &str) -> Vec<PasswordIssue> {
        let mut issues = Vec::new();

        if password.is_empty() {
            issues.push(PasswordIssue::Missing);
        }
        if text_len(password) < self.min_length {
            issues.push(PasswordIssue::TooShort(self.min_length));
        }
        if !password.chars().any(|c| self.symbols.contains(c)) {
            issues.push(PasswordIssue::NoSymbol);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            issues.push(PasswordIssue::NoDigit);
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            issues.push(PasswordIssue::NoUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            issues.push(PasswordIssue::NoLowercase);
        }

        issues
    }

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        self.check(password).is_empty()
    }
}
