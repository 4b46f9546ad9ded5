//! Password strength evaluator - main scoring logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::PasswordPolicy;
use crate::report::{CrackTimeBucket, ScoreReport, StrengthLevel};
use crate::rules::{RuleOutcome, character_class_rule, denylist_rule, length_rule};

/// Points awarded for each satisfied rule.
pub const POINTS_PER_RULE: i32 = 2;

/// Points removed when the password contains a denylisted pattern.
pub const DENYLIST_PENALTY: i32 = 2;

/// Delay before a channel evaluation starts, so fast typing can cancel it.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates a password against a policy.
///
/// Never fails: every input, including the empty string, yields a report.
///
/// Two counters are kept apart. The number of satisfied rules decides the
/// [`StrengthLevel`]; the numeric score, which the denylist can lower,
/// decides the [`CrackTimeBucket`]. A denylist hit therefore never demotes
/// the strength level.
pub fn evaluate(password: &SecretString, policy: &PasswordPolicy) -> ScoreReport {
    let mut outcomes: Vec<RuleOutcome> = Vec::with_capacity(policy.rule_count() + 1);

    outcomes.push(length_rule(password, policy.min_length()));
    for class in policy.required_classes() {
        outcomes.push(character_class_rule(password, *class));
    }

    let mut satisfied_rules = 0;
    let mut score = 0;
    let mut violations = Vec::new();
    let mut suggestions = Vec::new();

    for outcome in &outcomes {
        if outcome.satisfied {
            satisfied_rules += 1;
            score += POINTS_PER_RULE;
        } else {
            violations.push(outcome.violation.clone());
            suggestions.push(outcome.suggestion.clone());
        }
    }

    let denylist = denylist_rule(password, policy.denylist());
    if !denylist.satisfied {
        violations.push(denylist.violation.clone());
        suggestions.push(denylist.suggestion.clone());
        score -= DENYLIST_PENALTY;
    }
    outcomes.push(denylist);

    let strength = StrengthLevel::from_satisfied(satisfied_rules, policy.rule_count());
    let crack_time = CrackTimeBucket::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        %strength,
        score,
        satisfied_rules,
        violations = violations.len(),
        "password evaluated"
    );

    ScoreReport {
        strength,
        score,
        satisfied_rules,
        crack_time,
        violations,
        suggestions,
        outcomes,
    }
}

/// Debounced evaluation that sends the report via channel.
///
/// Nothing is sent if `token` is cancelled before the evaluation starts.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    policy: &PasswordPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let report = evaluate(password, policy);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_sends_report() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("Tr0ub4dor&3".to_string().into());

        evaluate_tx(&pwd, &PasswordPolicy::default(), token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.strength, StrengthLevel::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::new("Tr0ub4dor&3".to_string().into());

        evaluate_tx(&pwd, &PasswordPolicy::default(), token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }
}
