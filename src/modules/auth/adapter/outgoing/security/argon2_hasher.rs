use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::config::{parse_or, ConfigError};
use crate::modules::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_ITERATIONS: u32 = 2;
const DEFAULT_PARALLELISM: u32 = 1;

/// Argon2id password hashing, run off the async executor.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::from_params(Params::new(
            DEFAULT_MEMORY_KIB,
            DEFAULT_ITERATIONS,
            DEFAULT_PARALLELISM,
            None,
        )
        .expect("Invalid default Argon2 params"))
    }

    fn from_params(params: Params) -> Self {
        Self {
            params,
            #[cfg(test)]
            salt_override: None,
        }
    }

    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, ConfigError> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            ConfigError::Invalid {
                key: "ARGON2_*",
                reason: e.to_string(),
            }
        })?;
        Ok(Self::from_params(params))
    }

    /// `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`,
    /// each optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_params(
            parse_or("ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB)?,
            parse_or("ARGON2_ITERATIONS", DEFAULT_ITERATIONS)?,
            parse_or("ARGON2_PARALLELISM", DEFAULT_PARALLELISM)?,
        )
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::new(4 * 1024, 3, 1, None).expect("Invalid params"),
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            // params are read back from the PHC string
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(4 * 1024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_hash_and_verify_password() {
        let hasher = fast_hasher();

        let hashed = hasher.hash_password("river-bank-42").await.unwrap();
        assert!(hashed.starts_with("$argon2id$"));

        assert!(hasher.verify_password("river-bank-42", &hashed).await.unwrap());
        assert!(!hasher.verify_password("river-bank-43", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_gets_distinct_salts() {
        let hasher = fast_hasher();

        let a = hasher.hash_password("same-password").await.unwrap();
        let b = hasher.hash_password("same-password").await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_verify_rejects_unparseable_hash() {
        let hasher = fast_hasher();

        let result = hasher.verify_password("password123", "invalid-hash").await;

        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[tokio::test]
    async fn test_hash_password_error() {
        let bad_salt = SaltString::encode_b64(b"short").unwrap();
        let hasher = Argon2Hasher::with_fixed_salt(bad_salt.as_str());

        let result = hasher.hash_password("abc123").await;

        assert!(matches!(result, Err(HashError::HashFailed)));
    }

    #[tokio::test]
    async fn test_verify_password_error_on_tampered_params() {
        let hasher = fast_hasher();
        let valid_hash = hasher.hash_password("password123").await.unwrap();

        let mut parts: Vec<&str> = valid_hash.split('$').collect();
        parts[3] = "m=0,t=0,p=0";
        let tampered = parts.join("$");

        let result = hasher.verify_password("password123", &tampered).await;

        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[test]
    fn test_with_params_rejects_zero_iterations() {
        let result = Argon2Hasher::with_params(4 * 1024, 0, 1);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
