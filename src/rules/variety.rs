//! Character class rules - digit, uppercase, lowercase, special.

use secrecy::{ExposeSecret, SecretString};

use super::{RuleId, RuleOutcome};
use crate::policy::CharClass;

/// Checks that the password contains at least one character of `class`.
pub fn character_class_rule(password: &SecretString, class: CharClass) -> RuleOutcome {
    let satisfied = class.is_present(password.expose_secret());
    RuleOutcome::new(
        RuleId::from(class),
        satisfied,
        format!("Password should have at least one {}.", class),
        format!("Add at least one {} to the password.", class),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str, class: CharClass) -> RuleOutcome {
        character_class_rule(&SecretString::new(pwd.to_string().into()), class)
    }

    #[test]
    fn test_class_rule_missing_digit() {
        let outcome = check("NoNumbers!", CharClass::Digit);
        assert!(!outcome.satisfied);
        assert_eq!(outcome.rule, RuleId::Digit);
        assert_eq!(outcome.violation, "Password should have at least one digit.");
        assert_eq!(outcome.suggestion, "Add at least one digit to the password.");
    }

    #[test]
    fn test_class_rule_missing_uppercase() {
        let outcome = check("lowercase123!", CharClass::Uppercase);
        assert!(!outcome.satisfied);
        assert!(outcome.violation.contains("uppercase letter"));
    }

    #[test]
    fn test_class_rule_missing_lowercase() {
        let outcome = check("UPPERCASE123!", CharClass::Lowercase);
        assert!(!outcome.satisfied);
        assert!(outcome.suggestion.contains("lowercase letter"));
    }

    #[test]
    fn test_class_rule_missing_special() {
        let outcome = check("NoSpecial123", CharClass::Special);
        assert!(!outcome.satisfied);
        assert_eq!(
            outcome.violation,
            "Password should have at least one special character."
        );
    }

    #[test]
    fn test_class_rule_all_present() {
        for class in CharClass::ALL {
            assert!(check("HasAll123!@#", class).satisfied, "{class}");
        }
    }

    #[test]
    fn test_control_characters_count_as_special() {
        assert!(check("abc\u{7}", CharClass::Special).satisfied);
        assert!(check("tab\there", CharClass::Special).satisfied);
    }

    #[test]
    fn test_non_ascii_letters_are_special_only() {
        assert!(!check("ÉÀÜ", CharClass::Uppercase).satisfied);
        assert!(!check("éàü", CharClass::Lowercase).satisfied);
        assert!(check("ÉÀÜ", CharClass::Special).satisfied);
    }
}
