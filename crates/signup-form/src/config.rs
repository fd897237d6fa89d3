// File: src/config.rs
// Purpose: Rule bounds and choice lists, parsed from an optional TOML document

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use signup_validation::DEFAULT_SYMBOLS;
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub password: PasswordConfig,

    #[serde(default)]
    pub age: AgeConfig,

    #[serde(default)]
    pub phone: PhoneConfig,

    #[serde(default)]
    pub choices: ChoiceConfig,
}

/// Password strength requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordConfig {
    #[serde(default = "default_password_min_length")]
    pub min_length: usize,

    /// Characters that satisfy the "at least one symbol" requirement
    #[serde(default = "default_symbols")]
    pub symbols: String,
}

/// Inclusive age bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeConfig {
    #[serde(default = "default_age_min")]
    pub min: u32,

    #[serde(default = "default_age_max")]
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneConfig {
    #[serde(default = "default_phone_digits")]
    pub digits: usize,
}

/// Options offered by the interests checkbox group.
///
/// Gender options are fixed by [`Gender`](crate::Gender).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceConfig {
    #[serde(default = "default_interests")]
    pub interests: Vec<String>,
}

// Default values
fn default_password_min_length() -> usize {
    8
}

fn default_symbols() -> String {
    DEFAULT_SYMBOLS.to_string()
}

fn default_age_min() -> u32 {
    18
}

fn default_age_max() -> u32 {
    100
}

fn default_phone_digits() -> usize {
    10
}

fn default_interests() -> Vec<String> {
    vec![
        "coding".to_string(),
        "sports".to_string(),
        "reading".to_string(),
    ]
}

// Default implementations
impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_password_min_length(),
            symbols: default_symbols(),
        }
    }
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            min: default_age_min(),
            max: default_age_max(),
        }
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            digits: default_phone_digits(),
        }
    }
}

impl Default for ChoiceConfig {
    fn default() -> Self {
        Self {
            interests: default_interests(),
        }
    }
}

impl FormConfig {
    /// Parse configuration from TOML text. Empty text yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig =
            toml::from_str(content).context("Failed to parse form config")?;
        config.check()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    fn check(&self) -> Result<()> {
        if self.age.min > self.age.max {
            bail!(
                "age.min ({}) must not exceed age.max ({})",
                self.age.min,
                self.age.max
            );
        }
        if self.phone.digits == 0 {
            bail!("phone.digits must be at least 1");
        }
        if self.password.symbols.is_empty() {
            bail!("password.symbols must not be empty");
        }
        Ok(())
    }
}
