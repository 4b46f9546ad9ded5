//! Command-line front end: prompts for a password and prints its evaluation.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

use pwd_policy::{
    ConsolePresenter, CredentialHasher, DENYLIST_PATH_ENV, Denylist, MIN_LENGTH_ENV,
    PasswordPolicy, SecretString, StrengthPresenter, evaluate, parse_min_length, render_policy,
};

/// Password strength checker
#[derive(Parser, Debug)]
#[command(name = "pwd-policy")]
#[command(about = "Scores a password against a policy and optionally hashes it", long_about = None)]
struct CliArgs {
    /// Minimum password length [default: $PWD_MIN_LENGTH or 8]
    #[arg(long, value_parser = parse_min_length)]
    min_length: Option<usize>,

    /// File of forbidden substrings, one per line [default: $PWD_DENYLIST_PATH]
    #[arg(long)]
    denylist: Option<PathBuf>,

    /// Also print the Argon2 hash of the password
    #[arg(long)]
    hash: bool,
}

fn setup_logger() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive(LevelFilter::WARN.into())
        .add_directive("pwd_policy=info".parse()?);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    Ok(())
}

/// Environment first, then flags; empty variables count as unset.
fn build_policy(args: &CliArgs) -> anyhow::Result<PasswordPolicy> {
    let mut policy = PasswordPolicy::from_env().with_context(|| {
        format!("invalid {} or {}", MIN_LENGTH_ENV, DENYLIST_PATH_ENV)
    })?;
    if let Some(min_length) = args.min_length {
        policy = policy.with_min_length(min_length);
    }
    if let Some(path) = &args.denylist {
        policy = policy.with_denylist(Denylist::from_path(path)?);
    }
    Ok(policy)
}

fn read_password() -> anyhow::Result<SecretString> {
    let password =
        rpassword::prompt_password("Enter a password: ").context("failed to read password")?;
    Ok(SecretString::new(password.into()))
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let policy = build_policy(&args)?;
    println!("{}", render_policy(&policy));

    let password = read_password()?;

    let started = Instant::now();
    let report = evaluate(&password, &policy);
    let elapsed = started.elapsed();

    let mut presenter = ConsolePresenter::stdout();
    presenter.display_score(&report)?;
    println!(
        "Time taken to check password strength: {:.6} seconds",
        elapsed.as_secs_f64()
    );

    if args.hash {
        let hasher = CredentialHasher::new();
        let record = hasher.hash(&password)?;
        presenter.display_hash(&record)?;
    }

    presenter.display_suggestions(&report)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = setup_logger() {
        eprintln!("logging disabled: {:#}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            println!("An error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
