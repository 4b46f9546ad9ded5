//! Policy-based password strength scoring
//!
//! This library scores a password against a [`PasswordPolicy`], producing a
//! strength level, a numeric score, a crack-time estimate and remediation
//! suggestions. It can also derive a salted Argon2id hash of the password.
//!
//! # Features
//!
//! - `async` (default): debounced channel evaluation and off-executor hashing
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-policy` command-line front end
//!
//! # Environment Variables
//!
//! - `PWD_MIN_LENGTH`: Minimum password length (default: 8)
//! - `PWD_DENYLIST_PATH`: File of forbidden substrings, one per line
//!   (default: `abc`, `123`, `qwerty`, `password`)
//!
//! Empty values are treated as unset.
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate, CredentialHasher, PasswordPolicy, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let policy = PasswordPolicy::default();
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//!
//! let report = evaluate(&password, &policy);
//! assert_eq!(report.strength, StrengthLevel::Strong);
//! println!("Crack time: {}", report.crack_time);
//!
//! let hasher = CredentialHasher::new();
//! let record = hasher.hash(&password).expect("hashing failed");
//! assert!(hasher.verify(&record, &password));
//! ```

// Internal modules
mod denylist;
mod evaluator;
mod hasher;
mod policy;
mod presenter;
mod report;
mod rules;

// Public API
pub use denylist::{DENYLIST_PATH_ENV, Denylist};
pub use evaluator::{DENYLIST_PENALTY, POINTS_PER_RULE, evaluate};
pub use hasher::{CredentialHasher, HashError, HashRecord};
pub use policy::{
    CharClass, DEFAULT_MIN_LENGTH, MIN_LENGTH_ENV, PasswordPolicy, PolicyError, parse_min_length,
};
pub use presenter::{ConsolePresenter, StrengthPresenter, render_policy};
pub use report::{CrackTimeBucket, ScoreReport, StrengthLevel};
pub use rules::{RuleId, RuleOutcome};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_tx};

#[cfg(feature = "async")]
pub use hasher::hash_blocking;

// Password and hashing parameter types
pub use argon2::Params as HashParams;
pub use secrecy::{ExposeSecret, SecretString};
