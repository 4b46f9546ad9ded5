//! Denylist of forbidden substrings
//!
//! Handles loading and querying the common-pattern denylist.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::policy::PolicyError;

/// Environment variable pointing at a custom denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

const DEFAULT_PATTERNS: [&str; 4] = ["abc", "123", "qwerty", "password"];

/// Widely reused passwords, most frequent first.
const COMMON_PASSWORDS: [&str; 31] = [
    "password", "123456", "123456789", "qwerty", "abc123", "password123",
    "admin", "letmein", "welcome", "monkey", "dragon", "master", "shadow",
    "superman", "michael", "football", "baseball", "trustno1", "hello",
    "princess", "sunshine", "iloveyou", "charlie", "bailey", "passw0rd",
    "jordan", "assword", "freedom", "computer", "internet", "security",
];

/// Ordered set of lowercase substrings a password must not contain.
///
/// Order matters: [`Denylist::first_match`] reports the first pattern in list
/// order, not the leftmost occurrence in the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    patterns: Vec<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS)
    }
}

impl Denylist {
    /// Builds a denylist from arbitrary patterns.
    ///
    /// Patterns are trimmed and lowercased; blanks and duplicates are dropped.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut list: Vec<String> = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref().trim().to_lowercase();
            if !pattern.is_empty() && seen.insert(pattern.clone()) {
                list.push(pattern);
            }
        }
        Self { patterns: list }
    }

    /// Returns the default patterns followed by a list of common passwords.
    pub fn common() -> Self {
        Self::new(DEFAULT_PATTERNS.into_iter().chain(COMMON_PASSWORDS))
    }

    /// Returns an empty denylist that never matches.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Loads the denylist from a file, one pattern per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no patterns
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PolicyError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: file not found {:?}", path);
            return Err(PolicyError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let denylist = Self::new(content.lines());

        if denylist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: empty file {:?}", path);
            return Err(PolicyError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} patterns from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    /// Loads the denylist named by `PWD_DENYLIST_PATH`, or the built-in one.
    ///
    /// An empty variable counts as unset.
    pub fn from_env() -> Result<Self, PolicyError> {
        match denylist_path_from_env() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns the first pattern contained in `password`, case-insensitively.
    pub fn first_match(&self, password: &str) -> Option<&str> {
        let lowered = password.to_lowercase();
        self.patterns
            .iter()
            .find(|pattern| lowered.contains(pattern.as_str()))
            .map(String::as_str)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn denylist_path_from_env() -> Option<PathBuf> {
    std::env::var_os(DENYLIST_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
