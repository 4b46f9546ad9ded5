//! Credential hasher
//!
//! Turns a plaintext password into a self-describing Argon2id PHC string.
//! Hashing is deliberately slow; see [`hash_blocking`] for running it off an
//! async executor.

use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Output, ParamsString, PasswordHash, PasswordVerifier as _, Salt, SaltString,
};
use argon2::{Algorithm, Argon2, Block, Params, Version};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The primitive could not run with the configured parameters.
    /// Retrying with the same parameters fails the same way.
    #[error("Password hashing unavailable: {0}")]
    HashingUnavailable(String),
    #[error("Malformed hash record: {0}")]
    MalformedRecord(String),
}

/// Encoded hash: algorithm, version, parameters, salt and digest.
///
/// Only ever produced by [`CredentialHasher::hash`] or validated by
/// [`HashRecord::parse`]; compare records with [`CredentialHasher::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord(String);

impl HashRecord {
    /// Accepts a stored PHC string after checking its syntax.
    pub fn parse(encoded: &str) -> Result<Self, HashError> {
        PasswordHash::new(encoded).map_err(|e| HashError::MalformedRecord(e.to_string()))?;
        Ok(Self(encoded.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Salted, memory-hard password hasher.
///
/// Holds only the Argon2 parameters; construct one and pass it where needed.
#[derive(Debug, Clone, Default)]
pub struct CredentialHasher {
    algorithm: Algorithm,
    version: Version,
    params: Params,
}

impl CredentialHasher {
    /// Argon2id v0x13 with the library default cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Argon2id v0x13 with explicit cost parameters.
    pub fn with_params(params: Params) -> Self {
        Self {
            algorithm: Algorithm::Argon2id,
            version: Version::V0x13,
            params,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(self.algorithm, self.version, self.params.clone())
    }

    /// Hashes `password` with a fresh random salt.
    ///
    /// The working memory is reserved up front, so a failed allocation comes
    /// back as an error instead of aborting the process.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::HashingUnavailable`] when the memory cannot be
    /// reserved or the primitive fails.
    pub fn hash(&self, password: &SecretString) -> Result<HashRecord, HashError> {
        let blocks = self.params.block_count();
        let mut memory: Vec<Block> = Vec::new();
        memory.try_reserve_exact(blocks).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Argon2 memory reservation of {} blocks failed: {}", blocks, e);
            unavailable(format!("cannot reserve {} KiB: {}", blocks, e))
        })?;
        memory.resize(blocks, Block::default());

        let salt = SaltString::generate(&mut OsRng);
        let mut salt_buf = [0u8; Salt::MAX_LENGTH];
        let salt_bytes = salt.as_salt().decode_b64(&mut salt_buf).map_err(unavailable)?;

        let output_len = self.params.output_len().unwrap_or(Params::DEFAULT_OUTPUT_LEN);
        let mut digest = vec![0u8; output_len];
        self.argon2()
            .hash_password_into_with_memory(
                password.expose_secret().as_bytes(),
                salt_bytes,
                &mut digest,
                &mut memory,
            )
            .map_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Argon2 hash failed: {}", e);
                unavailable(e)
            })?;

        let phc = PasswordHash {
            algorithm: self.algorithm.ident(),
            version: Some(self.version.into()),
            params: ParamsString::try_from(&self.params).map_err(unavailable)?,
            salt: Some(salt.as_salt()),
            hash: Some(Output::new(&digest).map_err(unavailable)?),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("password hashed");

        Ok(HashRecord(phc.to_string()))
    }

    /// Checks `candidate` against `record` in constant time.
    ///
    /// Parameters and salt are read from the record itself.
    pub fn verify(&self, record: &HashRecord, candidate: &SecretString) -> bool {
        let parsed = match PasswordHash::new(record.as_str()) {
            Ok(h) => h,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("refusing to verify malformed hash record: {}", _e);
                return false;
            }
        };
        self.argon2()
            .verify_password(candidate.expose_secret().as_bytes(), &parsed)
            .is_ok()
    }
}

fn unavailable(e: impl fmt::Display) -> HashError {
    HashError::HashingUnavailable(e.to_string())
}

/// Hashes on tokio's blocking pool so the caller's executor stays responsive.
#[cfg(feature = "async")]
pub async fn hash_blocking(
    hasher: CredentialHasher,
    password: SecretString,
) -> Result<HashRecord, HashError> {
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| HashError::HashingUnavailable(format!("hashing task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_hash_is_argon2id_phc() {
        let hasher = CredentialHasher::new();
        let record = hasher.hash(&secret("Tr0ub4dor&3")).unwrap();
        assert!(record.as_str().starts_with("$argon2id$v=19$"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = CredentialHasher::new();
        let pwd = secret("same password");
        let first = hasher.hash(&pwd).unwrap();
        let second = hasher.hash(&pwd).unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify(&first, &pwd));
        assert!(hasher.verify(&second, &pwd));
        assert!(!hasher.verify(&first, &secret("same passw0rd")));
        assert!(!hasher.verify(&second, &secret("")));
    }

    #[test]
    fn test_hash_empty_password() {
        let hasher = CredentialHasher::new();
        let record = hasher.hash(&secret("")).unwrap();
        assert!(hasher.verify(&record, &secret("")));
        assert!(!hasher.verify(&record, &secret(" ")));
    }

    #[test]
    fn test_verify_with_other_params_reads_record() {
        let cheap = Params::new(8 * 1024, 1, 1, None).unwrap();
        let record = CredentialHasher::with_params(cheap)
            .hash(&secret("Password1!"))
            .unwrap();
        assert!(record.as_str().contains("m=8192,t=1,p=1"));
        assert!(CredentialHasher::new().verify(&record, &secret("Password1!")));
    }

    #[test]
    fn test_parse_round_trips_stored_record() {
        let hasher = CredentialHasher::new();
        let record = hasher.hash(&secret("hunter2")).unwrap();
        let stored = record.to_string();

        let parsed = HashRecord::parse(&stored).unwrap();
        assert_eq!(parsed, record);
        assert!(hasher.verify(&parsed, &secret("hunter2")));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            HashRecord::parse("not a hash"),
            Err(HashError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_hash_reports_unreservable_memory() {
        // about 4 TiB of working memory
        let huge = Params::new(Params::MAX_M_COST, 1, 1, None).unwrap();
        let result = CredentialHasher::with_params(huge).hash(&secret("Password1!"));
        assert!(matches!(result, Err(HashError::HashingUnavailable(_))));
    }

    #[test]
    fn test_hash_matches_library_encoding() {
        // same salt, password and params as the library's own encoder
        use argon2::password_hash::PasswordHasher as _;

        let hasher = CredentialHasher::new();
        let record = hasher.hash(&secret("hunter2")).unwrap();
        let parsed = PasswordHash::new(record.as_str()).unwrap();
        let salt = parsed.salt.unwrap();
        let expected = Argon2::default().hash_password(b"hunter2", salt).unwrap();
        assert_eq!(record.as_str(), expected.to_string());
    }

    #[test]
    fn test_error_display() {
        let err = HashError::HashingUnavailable("memory allocation failed".to_string());
        assert_eq!(
            err.to_string(),
            "Password hashing unavailable: memory allocation failed"
        );
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_blocking() {
        let hasher = CredentialHasher::new();
        let pwd = || SecretString::new("Tr0ub4dor&3".to_string().into());
        let record = hash_blocking(hasher.clone(), pwd()).await.unwrap();
        assert!(hasher.verify(&record, &pwd()));
    }
}
