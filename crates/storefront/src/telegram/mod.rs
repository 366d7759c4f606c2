//! Telegram integration for order notifications.
//!
//! This module provides:
//! - [`TelegramClient`] for sending messages through the Bot API
//! - [`build_order_message`] for rendering an order as an Arabic summary
//!
//! # Flow
//!
//! 1. A customer submits an order
//! 2. The order is priced against the catalog
//! 3. A summary message is sent to the store owner's chat
//! 4. If delivery fails, the order fails and the customer is asked to retry

mod client;
mod error;
mod messages;
mod types;

pub use client::TelegramClient;
pub use error::TelegramError;
pub use messages::{CURRENCY_SUFFIX, build_order_message, escape_html};
pub use types::{ApiResponse, PARSE_MODE_HTML, SendMessage, SentMessage};
