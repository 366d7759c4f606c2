//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_ADMIN_PHONE` - Phone number that registers as an admin (default: 0501234567)
//! - `STOREFRONT_SEED_FILE` - YAML file loaded into the catalog at startup
//! - `STOREFRONT_ALLOWED_ORIGIN` - CORS origin for a separately hosted UI
//! - `ORDER_DELIVERY_FEE` - Flat delivery fee added to every order (default: 5000)
//! - `TELEGRAM_BOT_TOKEN` - Bot token for order notifications (orders are disabled without it)
//! - `TELEGRAM_CHAT_ID` - Chat that receives order notifications (required with the token)
//! - `TELEGRAM_API_BASE` - Bot API base URL (default: <https://api.telegram.org>)
//! - `TELEGRAM_TIMEOUT_SECS` - Request timeout for the Bot API (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use axum::http::HeaderValue;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use mark_store_core::Price;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Phone number the storefront has always treated as the store owner.
pub const DEFAULT_ADMIN_PHONE: &str = "0501234567";

/// Default flat delivery fee, in dinars.
pub const DEFAULT_DELIVERY_FEE: i64 = 5000;

/// Public Telegram Bot API endpoint.
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
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

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Phone number that is granted admin rights at registration
    pub admin_phone: String,
    /// Optional catalog seed file
    pub seed_file: Option<PathBuf>,
    /// Optional CORS origin
    pub allowed_origin: Option<HeaderValue>,
    /// Order pricing configuration
    pub orders: OrderConfig,
    /// Telegram notification configuration (orders are disabled when absent)
    pub telegram: Option<TelegramConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Order pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfig {
    /// Flat delivery fee added to every order
    pub delivery_fee: Price,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            delivery_fee: Price::from_whole(DEFAULT_DELIVERY_FEE),
        }
    }
}

/// Telegram Bot API configuration.
///
/// Implements `Debug` manually to redact the bot token.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token (`123456:ABC...`)
    pub bot_token: SecretString,
    /// Destination chat ID
    pub chat_id: String,
    /// Bot API base URL
    pub api_base: Url,
    /// Request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if variables are invalid, or if the Telegram
    /// token fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`StorefrontConfig::from_env`].
    pub fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(env, "STOREFRONT_HOST", "127.0.0.1", |v| v.parse::<IpAddr>())?;
        let port = parse_var(env, "STOREFRONT_PORT", "3000", |v| v.parse::<u16>())?;
        let admin_phone = env("STOREFRONT_ADMIN_PHONE")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ADMIN_PHONE.to_string());
        let seed_file = env("STOREFRONT_SEED_FILE").map(PathBuf::from);
        let allowed_origin = env("STOREFRONT_ALLOWED_ORIGIN")
            .map(|v| {
                HeaderValue::from_str(v.trim()).map_err(|e| {
                    ConfigError::InvalidEnvVar("STOREFRONT_ALLOWED_ORIGIN".to_string(), e.to_string())
                })
            })
            .transpose()?;

        let orders = OrderConfig::from_lookup(env)?;
        let telegram = TelegramConfig::from_lookup(env)?;

        Ok(Self {
            host,
            port,
            admin_phone,
            seed_file,
            allowed_origin,
            orders,
            telegram,
            sentry_dsn: env("SENTRY_DSN"),
            sentry_environment: env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration for tests and local runs: loopback, ephemeral port,
    /// no seed, no Telegram.
    #[must_use]
    pub fn local() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            admin_phone: DEFAULT_ADMIN_PHONE.to_string(),
            seed_file: None,
            allowed_origin: None,
            orders: OrderConfig::default(),
            telegram: None,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl OrderConfig {
    fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let delivery_fee = parse_var(
            env,
            "ORDER_DELIVERY_FEE",
            &DEFAULT_DELIVERY_FEE.to_string(),
            |v| v.parse::<Price>(),
        )?;
        if delivery_fee < Price::zero() {
            return Err(ConfigError::InvalidEnvVar(
                "ORDER_DELIVERY_FEE".to_string(),
                "must not be negative".to_string(),
            ));
        }
        if delivery_fee > Price::MAX {
            return Err(ConfigError::InvalidEnvVar(
                "ORDER_DELIVERY_FEE".to_string(),
                format!("must not exceed {}", Price::MAX),
            ));
        }
        Ok(Self { delivery_fee })
    }
}

impl TelegramConfig {
    fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        let Some(token) = env("TELEGRAM_BOT_TOKEN") else {
            return Ok(None);
        };
        validate_secret_strength(&token, "TELEGRAM_BOT_TOKEN")?;

        let chat_id = env("TELEGRAM_CHAT_ID")
            .ok_or_else(|| ConfigError::MissingEnvVar("TELEGRAM_CHAT_ID".to_string()))?;
        let api_base = parse_var(env, "TELEGRAM_API_BASE", DEFAULT_TELEGRAM_API_BASE, |v| {
            Url::parse(v)
        })?;
        let timeout_secs = parse_var(env, "TELEGRAM_TIMEOUT_SECS", "10", |v| v.parse::<u64>())?;

        Ok(Some(Self {
            bot_token: SecretString::from(token),
            chat_id,
            api_base,
            timeout: Duration::from_secs(timeout_secs),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read a variable (or its default) and parse it, naming the variable on failure.
fn parse_var<T, E: std::fmt::Display>(
    env: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, ConfigError> {
    let raw = env(key).unwrap_or_else(|| default.to_string());
    parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real tokens have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use the token issued by BotFather."
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const GOOD_TOKEN: &str = "123456789:AAF3kq9ZrT-xW2mPq7LbN5vYc8HdJ0sUeGi";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(&lookup(&[])).unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.admin_phone, DEFAULT_ADMIN_PHONE);
        assert_eq!(config.orders.delivery_fee, Price::from_whole(5000));
        assert!(config.telegram.is_none());
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = StorefrontConfig::from_lookup(&lookup(&[("STOREFRONT_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "STOREFRONT_PORT"));
    }

    #[test]
    fn test_negative_delivery_fee_rejected() {
        let err = StorefrontConfig::from_lookup(&lookup(&[("ORDER_DELIVERY_FEE", "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "ORDER_DELIVERY_FEE"));
    }

    #[test]
    fn test_oversized_delivery_fee_rejected() {
        let err =
            StorefrontConfig::from_lookup(&lookup(&[("ORDER_DELIVERY_FEE", "100000000")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "ORDER_DELIVERY_FEE"));
    }

    #[test]
    fn test_allowed_origin_must_be_header_safe() {
        let config = StorefrontConfig::from_lookup(&lookup(&[(
            "STOREFRONT_ALLOWED_ORIGIN",
            "https://shop.example.iq",
        )]))
        .unwrap();
        assert_eq!(
            config.allowed_origin.unwrap(),
            HeaderValue::from_static("https://shop.example.iq")
        );

        let err = StorefrontConfig::from_lookup(&lookup(&[(
            "STOREFRONT_ALLOWED_ORIGIN",
            "https://shop\n.example",
        )]));
        assert!(err.is_ok() || matches!(err, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_telegram_requires_chat_id() {
        let err = StorefrontConfig::from_lookup(&lookup(&[("TELEGRAM_BOT_TOKEN", GOOD_TOKEN)]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_telegram_config_loaded() {
        let config = StorefrontConfig::from_lookup(&lookup(&[
            ("TELEGRAM_BOT_TOKEN", GOOD_TOKEN),
            ("TELEGRAM_CHAT_ID", "7348531151"),
            ("TELEGRAM_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        let telegram = config.telegram.unwrap();
        assert_eq!(telegram.chat_id, "7348531151");
        assert_eq!(telegram.api_base.as_str(), "https://api.telegram.org/");
        assert_eq!(telegram.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_telegram_placeholder_token_rejected() {
        let err = StorefrontConfig::from_lookup(&lookup(&[
            ("TELEGRAM_BOT_TOKEN", "your-bot-token"),
            ("TELEGRAM_CHAT_ID", "1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        assert!(validate_secret_strength(GOOD_TOKEN, "TEST_VAR").is_ok());
    }

    #[test]
    fn test_telegram_config_debug_redacts_token() {
        let config = TelegramConfig {
            bot_token: SecretString::from("super_secret_bot_token"),
            chat_id: "42".to_string(),
            api_base: Url::parse(DEFAULT_TELEGRAM_API_BASE).unwrap(),
            timeout: Duration::from_secs(10),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("42"));
        assert!(!debug_output.contains("super_secret_bot_token"));
    }
}
