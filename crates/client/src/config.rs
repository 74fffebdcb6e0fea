//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_STORE` - Shopify store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_ACCESS_TOKEN` - Admin API access token (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `SHOPIFY_API_VERSION` - API version (default: 2024-10)
//! - `SHOPIFY_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// API version used when `SHOPIFY_API_VERSION` is unset.
pub const DEFAULT_API_VERSION: &str = "2024-10";

/// Request timeout used when `SHOPIFY_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Shopify REST Admin API configuration.
///
/// Implements `Debug` manually to redact the HIGH PRIVILEGE access token.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub store: String,
    /// Shopify API version (e.g., 2024-10)
    pub api_version: String,
    /// Admin API access token (HIGH PRIVILEGE - full store access)
    pub access_token: SecretString,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ShopifyConfig {
    /// Build a configuration with the default API version and timeout.
    #[must_use]
    pub fn new(store: impl Into<String>, access_token: SecretString) -> Self {
        Self {
            store: store.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = required(&lookup, "SHOPIFY_STORE")?;
        validate_store(&store, "SHOPIFY_STORE")?;

        let access_token = required(&lookup, "SHOPIFY_ACCESS_TOKEN")?;
        validate_token(&access_token, "SHOPIFY_ACCESS_TOKEN")?;

        let api_version =
            lookup("SHOPIFY_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        validate_api_version(&api_version, "SHOPIFY_API_VERSION")?;

        let timeout = match lookup("SHOPIFY_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw, "SHOPIFY_TIMEOUT_SECS")?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            store,
            api_version,
            access_token: SecretString::from(access_token),
            timeout,
        })
    }

    /// Whether the access token is set to a non-empty value.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        !self.access_token.expose_secret().is_empty()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required variable through the lookup.
fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Validate a bare store domain (no scheme, no path).
fn validate_store(store: &str, var_name: &str) -> Result<(), ConfigError> {
    if store.contains("://") || store.contains('/') {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must be a bare domain like your-store.myshopify.com".to_string(),
        ));
    }
    if !store.contains('.') {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("'{store}' is not a domain"),
        ));
    }
    Ok(())
}

/// Validate an API version: `YYYY-MM` or `unstable`.
fn validate_api_version(version: &str, var_name: &str) -> Result<(), ConfigError> {
    if version == "unstable" {
        return Ok(());
    }

    let valid = match version.split_once('-') {
        Some((year, month)) => {
            year.len() == 4
                && month.len() == 2
                && year.chars().all(|c| c.is_ascii_digit())
                && month
                    .parse::<u8>()
                    .is_ok_and(|m| (1..=12).contains(&m))
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("'{version}' is not YYYY-MM or 'unstable'"),
        ))
    }
}

/// Reject tokens that look like copied placeholder values.
fn validate_token(token: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = token.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

/// Parse a positive number of seconds.
fn parse_timeout(raw: &str, var_name: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must be greater than zero".to_string(),
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string())),
    }
}
