//! Evaluation results.

use std::fmt;

use crate::evaluator::POINTS_PER_RULE;
use crate::rules::{RuleId, RuleOutcome};

/// Qualitative strength, driven only by the number of satisfied rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Satisfied-rule floor for [`StrengthLevel::Medium`].
    pub const MEDIUM_THRESHOLD: usize = 3;

    /// Every evaluated rule satisfied is strong; three or more is medium.
    pub fn from_satisfied(satisfied: usize, total: usize) -> Self {
        if satisfied == total {
            StrengthLevel::Strong
        } else if satisfied >= Self::MEDIUM_THRESHOLD {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rough crack-time estimate, driven only by the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrackTimeBucket {
    LessThanAMinute,
    MinutesToHours,
    HoursToDays,
    MoreThanAYear,
}

impl CrackTimeBucket {
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=4 => CrackTimeBucket::LessThanAMinute,
            5..=6 => CrackTimeBucket::MinutesToHours,
            7..=8 => CrackTimeBucket::HoursToDays,
            _ => CrackTimeBucket::MoreThanAYear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CrackTimeBucket::LessThanAMinute => "Less than a minute",
            CrackTimeBucket::MinutesToHours => "Several minutes to hours",
            CrackTimeBucket::HoursToDays => "Several hours to days",
            CrackTimeBucket::MoreThanAYear => "More than a year",
        }
    }
}

impl fmt::Display for CrackTimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate result of one evaluation.
///
/// Holds no reference to the evaluated password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub strength: StrengthLevel,
    /// Two points per satisfied rule, minus the denylist penalty.
    pub score: i32,
    /// Satisfied rules among length and the required classes.
    pub satisfied_rules: usize,
    pub crack_time: CrackTimeBucket,
    pub violations: Vec<String>,
    pub suggestions: Vec<String>,
    /// Every evaluated rule in evaluation order, denylist last.
    pub outcomes: Vec<RuleOutcome>,
}

impl ScoreReport {
    /// Best achievable score under the policy that produced this report.
    pub fn max_score(&self) -> i32 {
        let scored = self
            .outcomes
            .iter()
            .filter(|o| o.rule != RuleId::Denylist)
            .count();
        scored as i32 * POINTS_PER_RULE
    }

    pub fn is_strong(&self) -> bool {
        self.strength == StrengthLevel::Strong
    }
}
