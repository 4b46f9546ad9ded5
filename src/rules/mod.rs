//! Password policy rules
//!
//! Each rule checks one aspect of a password and reports a [`RuleOutcome`].

mod denylist;
mod length;
mod variety;

pub use denylist::denylist_rule;
pub use length::length_rule;
pub use variety::character_class_rule;

use std::fmt;

use crate::policy::CharClass;

/// Identifies which policy rule produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    Length,
    Digit,
    Uppercase,
    Lowercase,
    Special,
    Denylist,
}

impl From<CharClass> for RuleId {
    fn from(class: CharClass) -> Self {
        match class {
            CharClass::Digit => RuleId::Digit,
            CharClass::Uppercase => RuleId::Uppercase,
            CharClass::Lowercase => RuleId::Lowercase,
            CharClass::Special => RuleId::Special,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleId::Length => "length",
            RuleId::Digit => "digit",
            RuleId::Uppercase => "uppercase",
            RuleId::Lowercase => "lowercase",
            RuleId::Special => "special",
            RuleId::Denylist => "denylist",
        };
        f.write_str(name)
    }
}

/// Result of checking a single rule.
///
/// Messages are always populated; callers only surface them when
/// `satisfied` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: RuleId,
    pub satisfied: bool,
    pub violation: String,
    pub suggestion: String,
}

impl RuleOutcome {
    fn new(
        rule: RuleId,
        satisfied: bool,
        violation: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            satisfied,
            violation: violation.into(),
            suggestion: suggestion.into(),
        }
    }
}
