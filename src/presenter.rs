//! Rendering of evaluation results.
//!
//! Front ends implement [`StrengthPresenter`]; the scoring and hashing code
//! never depends on a particular UI.

use std::io::{self, Write};

use crate::hasher::HashRecord;
use crate::policy::PasswordPolicy;
use crate::report::{ScoreReport, StrengthLevel};

/// Output capability a front end provides.
pub trait StrengthPresenter {
    /// Shows the strength level, score and crack-time estimate.
    fn display_score(&mut self, report: &ScoreReport) -> io::Result<()>;

    /// Shows remediation advice for a report.
    fn display_suggestions(&mut self, report: &ScoreReport) -> io::Result<()>;

    fn display_hash(&mut self, record: &HashRecord) -> io::Result<()>;

    fn present(&mut self, report: &ScoreReport, record: Option<&HashRecord>) -> io::Result<()> {
        self.display_score(report)?;
        if let Some(record) = record {
            self.display_hash(record)?;
        }
        self.display_suggestions(report)
    }
}

/// Plain text presenter writing to any [`Write`] sink.
pub struct ConsolePresenter<W> {
    out: W,
}

impl ConsolePresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StrengthPresenter for ConsolePresenter<W> {
    fn display_score(&mut self, report: &ScoreReport) -> io::Result<()> {
        writeln!(
            self.out,
            "Password strength: {} ({}/{})",
            report.strength,
            report.score,
            report.max_score()
        )?;
        writeln!(self.out, "Estimated crack time: {}", report.crack_time)
    }

    fn display_suggestions(&mut self, report: &ScoreReport) -> io::Result<()> {
        let verdict = match report.strength {
            StrengthLevel::Strong => "Password is strong.",
            StrengthLevel::Medium => "Password is medium strength.",
            StrengthLevel::Weak => "Password is weak.",
        };
        writeln!(self.out, "{}", verdict)?;

        // strong passwords get no advice, even with a denylist hit
        if report.is_strong() || report.suggestions.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "Suggestions:")?;
        for suggestion in &report.suggestions {
            writeln!(self.out, "* {}", suggestion)?;
        }
        Ok(())
    }

    fn display_hash(&mut self, record: &HashRecord) -> io::Result<()> {
        writeln!(self.out, "Argon2 Hash: {}", record)
    }
}

/// Numbered policy banner shown before prompting.
pub fn render_policy(policy: &PasswordPolicy) -> String {
    let mut lines = vec![
        "Password Policy:".to_string(),
        format!("1. Minimum length: {} characters", policy.min_length()),
    ];
    for class in policy.required_classes() {
        lines.push(format!("{}. At least one {}", lines.len(), class));
    }
    if !policy.denylist().is_empty() {
        lines.push(format!("{}. No common patterns", lines.len()));
    }
    lines.join("\n")
}
