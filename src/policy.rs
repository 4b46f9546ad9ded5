//! Password policy configuration
//!
//! A [`PasswordPolicy`] is fixed at construction and only ever borrowed by the
//! evaluator.

use std::fmt;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::denylist::Denylist;

/// Environment variable overriding the minimum password length.
pub const MIN_LENGTH_ENV: &str = "PWD_MIN_LENGTH";

pub const DEFAULT_MIN_LENGTH: usize = 8;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
    #[error("Invalid minimum length: {0:?}")]
    InvalidMinLength(String),
}

// Digits are any Unicode decimal digit (`Nd`); letters are ASCII only, and
// anything outside `[A-Za-z0-9]` is special. A non-ASCII digit is therefore
// both a digit and a special character.
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit pattern"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid uppercase pattern"));
static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid lowercase pattern"));
static SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid special pattern"));

/// Character classes a policy can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Uppercase,
    Lowercase,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Digit,
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Special,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            CharClass::Digit => &DIGIT,
            CharClass::Uppercase => &UPPERCASE,
            CharClass::Lowercase => &LOWERCASE,
            CharClass::Special => &SPECIAL,
        }
    }

    /// Whether `password` contains at least one character of this class.
    pub fn is_present(self, password: &str) -> bool {
        self.pattern().is_match(password)
    }

    /// Human name used in policy messages.
    pub fn describe(self) -> &'static str {
        match self {
            CharClass::Digit => "digit",
            CharClass::Uppercase => "uppercase letter",
            CharClass::Lowercase => "lowercase letter",
            CharClass::Special => "special character",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Rules a password is scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    required_classes: Vec<CharClass>,
    denylist: Denylist,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            required_classes: CharClass::ALL.to_vec(),
            denylist: Denylist::default(),
        }
    }
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a policy from `PWD_MIN_LENGTH` and `PWD_DENYLIST_PATH`.
    ///
    /// Unset or empty variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the minimum length is not a positive integer or the
    /// denylist file cannot be loaded.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Self::default().with_denylist(Denylist::from_env()?);

        if let Some(raw) = std::env::var(MIN_LENGTH_ENV).ok().filter(|v| !v.is_empty()) {
            policy = policy.with_min_length(parse_min_length(&raw)?);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            min_length = policy.min_length,
            denylist = policy.denylist.len(),
            "policy loaded from environment"
        );

        Ok(policy)
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Replaces the required classes. Evaluation order stays
    /// digit, uppercase, lowercase, special regardless of input order.
    pub fn with_required_classes<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = CharClass>,
    {
        let wanted: Vec<CharClass> = classes.into_iter().collect();
        self.required_classes = CharClass::ALL
            .into_iter()
            .filter(|class| wanted.contains(class))
            .collect();
        self
    }

    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = denylist;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn required_classes(&self) -> &[CharClass] {
        &self.required_classes
    }

    pub fn requires(&self, class: CharClass) -> bool {
        self.required_classes.contains(&class)
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Number of rules scored per evaluation (length + each required class).
    pub fn rule_count(&self) -> usize {
        1 + self.required_classes.len()
    }
}

/// Parses a minimum length value, rejecting zero and garbage.
pub fn parse_min_length(raw: &str) -> Result<usize, PolicyError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(PolicyError::InvalidMinLength(raw.to_string())),
    }
}
