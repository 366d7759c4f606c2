//! Telegram Bot API request and response types.
//!
//! Only the `sendMessage` method is used.
//!
//! See: <https://core.telegram.org/bots/api#sendmessage>

use serde::{Deserialize, Serialize};

/// Formatting mode for message text.
pub const PARSE_MODE_HTML: &str = "HTML";

/// Body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage<'a> {
    /// Destination chat.
    pub chat_id: &'a str,
    /// Message text.
    pub text: &'a str,
    /// Text formatting mode.
    pub parse_mode: &'static str,
}

/// Envelope returned by every Bot API method.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub description: Option<String>,
    pub result: Option<T>,
}

/// The message object returned by `sendMessage` (subset).
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}
