//! Password hashing with Argon2id.
//!
//! Hashes are stored in PHC string format, which embeds the algorithm,
//! parameters and per-hash salt, so verification needs nothing but the string.
//! Services call [`PasswordHash::hash`] and [`PasswordHash::check`], which move
//! the Argon2 work onto tokio's blocking pool.

use std::fmt;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
};

use tokio::task;
use zeroize::Zeroizing;

use super::Error;

/// PHC-formatted password hash.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Examples
    /// ```
    /// use jobboard::domain::PasswordHash;
    ///
    /// let hash = PasswordHash::generate("hunter2").expect("hashing succeeds");
    /// assert!(hash.verify("hunter2"));
    /// assert!(!hash.verify("hunter3"));
    /// ```
    pub fn generate(plaintext: &str) -> Result<Self, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| Error::internal(format!("failed to hash password: {err}")))?;
        Ok(Self(hash.to_string()))
    }

    /// [`generate`](Self::generate) on tokio's blocking thread pool.
    pub async fn hash(plaintext: &str) -> Result<Self, Error> {
        let plaintext = Zeroizing::new(plaintext.to_owned());
        task::spawn_blocking(move || Self::generate(&plaintext))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
    }

    /// [`verify`](Self::verify) on the blocking thread pool. A task that
    /// fails to complete counts as a mismatch.
    pub async fn check(&self, candidate: &str) -> bool {
        let stored = self.clone();
        let candidate = Zeroizing::new(candidate.to_owned());
        match task::spawn_blocking(move || stored.verify(&candidate)).await {
            Ok(matched) => matched,
            Err(error) => {
                tracing::error!(%error, "password verification task failed");
                false
            }
        }
    }

    /// Wrap a hash loaded from the store.
    pub fn from_stored(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded form for persistence.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Check a plaintext candidate. Malformed stored hashes never verify.
    pub fn verify(&self, candidate: &str) -> bool {
        match PhcHash::new(&self.0) {
            Ok(parsed) => Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(error) => {
                tracing::warn!(%error, "stored password hash is malformed");
                false
            }
        }
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
