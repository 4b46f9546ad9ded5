//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::{RuleId, RuleOutcome};

/// Checks that the password has at least `min_length` characters.
///
/// Length is counted in chars, so multi-byte characters count once.
pub fn length_rule(password: &SecretString, min_length: usize) -> RuleOutcome {
    let satisfied = password.expose_secret().chars().count() >= min_length;
    RuleOutcome::new(
        RuleId::Length,
        satisfied,
        format!(
            "Password is too short. It should be at least {} characters.",
            min_length
        ),
        format!(
            "Increase password length to at least {} characters.",
            min_length
        ),
    )
}
