//! Telegram Bot API client.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, instrument};
use url::Url;

use super::error::TelegramError;
use super::types::{ApiResponse, PARSE_MODE_HTML, SendMessage, SentMessage};
use crate::config::TelegramConfig;

/// Client for posting messages to the store owner's chat.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    bot_token: SecretString,
    chat_id: String,
    api_base: Url,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("bot_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base.as_str())
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Config` if the HTTP client cannot be built.
    pub fn new(config: &TelegramConfig) -> Result<Self, TelegramError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TelegramError::Config(e.to_string()))?;

        Ok(Self {
            client,
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
            api_base: config.api_base.clone(),
        })
    }

    /// The chat messages are sent to.
    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.api_base.as_str().trim_end_matches('/'),
            self.bot_token.expose_secret()
        )
    }

    /// Send an HTML-formatted message to the configured chat.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the response cannot be parsed,
    /// or Telegram reports `ok: false`.
    #[instrument(skip(self, text), fields(chat_id = %self.chat_id))]
    pub async fn send_message(&self, text: &str) -> Result<SentMessage, TelegramError> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: PARSE_MODE_HTML,
        };

        // The token is part of the URL, so it is stripped from any error.
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| TelegramError::Request(e.without_url().to_string()))?;

        let status = response.status();
        let result: ApiResponse<SentMessage> = response
            .json()
            .await
            .map_err(|e| TelegramError::Response(e.without_url().to_string()))?;

        if !result.ok {
            error!(
                status = %status,
                description = ?result.description,
                "Telegram API error sending message"
            );
            return Err(TelegramError::Api(
                result
                    .description
                    .unwrap_or_else(|| format!("HTTP {status}")),
            ));
        }

        let message = result
            .result
            .ok_or_else(|| TelegramError::Response("missing result".to_string()))?;

        debug!(message_id = message.message_id, "Message sent to Telegram");

        Ok(message)
    }
}
