//! Telegram-related errors.

use thiserror::Error;

/// Errors that can occur when delivering a Telegram notification.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// No bot token/chat configured; notifications are disabled.
    #[error("Telegram notifications are not configured")]
    NotConfigured,

    /// HTTP request failed (connection, timeout).
    #[error("Telegram request failed: {0}")]
    Request(String),

    /// Failed to parse response.
    #[error("Telegram response error: {0}")]
    Response(String),

    /// Bot API returned `ok: false`.
    #[error("Telegram API error: {0}")]
    Api(String),

    /// Client could not be built.
    #[error("Telegram configuration error: {0}")]
    Config(String),
}
