//! Credential management for Huobi API authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::HuobiError;

/// Default environment variable holding the access key.
pub const ACCESS_KEY_VAR: &str = "HUOBI_ACCESS_KEY";
/// Default environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "HUOBI_SECRET_KEY";

/// API credentials containing the access key and secret key.
#[derive(Clone)]
pub struct Credentials {
    /// The access key, sent as `AccessKeyId` on signed requests
    pub access_key: String,
    /// The secret key, used only as the HMAC key
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an access key and secret key.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Check that both halves of the key pair are present.
    pub fn validate(&self) -> Result<(), HuobiError> {
        if self.access_key.is_empty() || self.expose_secret().is_empty() {
            return Err(HuobiError::Configuration(
                "Params Missing: accessKey or secretKey".to_string(),
            ));
        }
        Ok(())
    }

    /// Create credentials from `HUOBI_ACCESS_KEY` and `HUOBI_SECRET_KEY`.
    pub fn from_env() -> Result<Self, HuobiError> {
        Self::try_from_env().ok_or_else(|| {
            HuobiError::Configuration(format!(
                "Environment variables {ACCESS_KEY_VAR} and {SECRET_KEY_VAR} must be set"
            ))
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if either variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(ACCESS_KEY_VAR, SECRET_KEY_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if either variable is not set.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let access_key = std::env::var(key_var).ok()?;
        let secret_key = std::env::var(secret_var).ok()?;
        Some(Self::new(access_key, secret_key))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
