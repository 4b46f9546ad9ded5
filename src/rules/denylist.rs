//! Denylist rule - checks for common substrings.

use secrecy::{ExposeSecret, SecretString};

use super::{RuleId, RuleOutcome};
use crate::denylist::Denylist;

/// Checks the password against the denylist.
///
/// At most one outcome is produced however many patterns match.
pub fn denylist_rule(password: &SecretString, denylist: &Denylist) -> RuleOutcome {
    let hit = denylist.first_match(password.expose_secret());

    // the matched pattern is part of the password: never log it
    #[cfg(feature = "tracing")]
    {
        if hit.is_some() {
            tracing::debug!("password contains a denylisted pattern");
        }
    }

    RuleOutcome::new(
        RuleId::Denylist,
        hit.is_none(),
        "Password should not contain common patterns.",
        "Avoid using common patterns in the password.",
    )
}
