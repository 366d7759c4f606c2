//! Integration test harness for Mark Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mark-store-integration-tests
//! ```
//!
//! Every test starts its own storefront on an ephemeral loopback port, so
//! tests are independent and need no external services. Order notifications
//! go to a [`FakeTelegram`] server that records what it receives.
//!
//! # Test Categories
//!
//! - `catalog` - Categories, products, browse view
//! - `users` - Registration and login
//! - `reviews` - Review posting
//! - `orders` - Order submission and Telegram delivery

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use reqwest::Client;
use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

use mark_store_storefront::config::{StorefrontConfig, TelegramConfig};
use mark_store_storefront::state::AppState;
use mark_store_storefront::store::CatalogStore;

/// Bot token used by test Telegram configurations.
pub const TEST_BOT_TOKEN: &str = "123456789:AAF3kq9ZrT-xW2mPq7LbN5vYc8HdJ0sUeGi";

/// Chat ID used by test Telegram configurations.
pub const TEST_CHAT_ID: &str = "7348531151";

async fn bind() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");
    (listener, addr)
}

/// A running storefront.
pub struct TestServer {
    pub client: Client,
    pub base_url: String,
    pub store: CatalogStore,
}

impl TestServer {
    /// Start a storefront with an empty store and no Telegram.
    pub async fn start() -> Self {
        Self::with_config(StorefrontConfig::local()).await
    }

    /// Start a storefront that sends orders with the given Telegram config.
    pub async fn with_telegram(telegram: TelegramConfig) -> Self {
        let mut config = StorefrontConfig::local();
        config.telegram = Some(telegram);
        Self::with_config(config).await
    }

    /// Start a storefront with a custom configuration and an empty store.
    pub async fn with_config(config: StorefrontConfig) -> Self {
        let store = CatalogStore::new();
        let state =
            AppState::new(config, store.clone()).expect("Failed to build application state");
        let app = mark_store_storefront::app(state);

        let (listener, addr) = bind().await;
        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server failed");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            store,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a path and parse the JSON body.
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed");
        into_parts(response).await
    }

    /// POST a JSON body and parse the JSON response.
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed");
        into_parts(response).await
    }

    /// PUT a JSON body and parse the JSON response.
    pub async fn put_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PUT request failed");
        into_parts(response).await
    }

    /// PATCH a JSON body and parse the JSON response.
    pub async fn patch_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let response = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PATCH request failed");
        into_parts(response).await
    }

    /// DELETE a path and return the status.
    pub async fn delete(&self, path: &str) -> StatusCode {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE request failed");
        response.status()
    }
}

async fn into_parts(response: reqwest::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.bytes().await.expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

/// A `sendMessage` call received by [`FakeTelegram`].
#[derive(Debug, Clone)]
pub struct SentMessage {
    /// Path segment before `/sendMessage` (`bot<token>`).
    pub bot: String,
    /// JSON body of the call.
    pub body: Value,
}

#[derive(Clone)]
struct FakeTelegramState {
    messages: Arc<Mutex<Vec<SentMessage>>>,
    reject: bool,
}

/// Minimal stand-in for the Telegram Bot API.
pub struct FakeTelegram {
    pub base_url: Url,
    messages: Arc<Mutex<Vec<SentMessage>>>,
}

impl FakeTelegram {
    /// Start a fake API that accepts every message.
    pub async fn start() -> Self {
        Self::spawn(false).await
    }

    /// Start a fake API that answers every message with `ok: false`.
    pub async fn rejecting() -> Self {
        Self::spawn(true).await
    }

    async fn spawn(reject: bool) -> Self {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let state = FakeTelegramState {
            messages: Arc::clone(&messages),
            reject,
        };
        let app = Router::new()
            .route("/{bot}/sendMessage", post(send_message))
            .with_state(state);

        let (listener, addr) = bind().await;
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Fake Telegram server failed");
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}")).expect("valid URL"),
            messages,
        }
    }

    /// Telegram configuration pointing at this fake.
    #[must_use]
    pub fn config(&self) -> TelegramConfig {
        telegram_config(self.base_url.clone())
    }

    /// Messages received so far.
    #[must_use]
    pub fn messages(&self) -> Vec<SentMessage> {
        self.messages.lock().expect("lock poisoned").clone()
    }
}

async fn send_message(
    State(state): State<FakeTelegramState>,
    Path(bot): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .messages
        .lock()
        .expect("lock poisoned")
        .push(SentMessage { bot, body });

    if state.reject {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"ok": false, "error_code": 400, "description": "Bad Request: chat not found"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"ok": true, "result": {"message_id": 101}})),
    )
}

/// Telegram configuration for the given API base.
#[must_use]
pub fn telegram_config(api_base: Url) -> TelegramConfig {
    TelegramConfig {
        bot_token: SecretString::from(TEST_BOT_TOKEN),
        chat_id: TEST_CHAT_ID.to_string(),
        api_base,
        timeout: Duration::from_secs(2),
    }
}

/// Telegram configuration pointing at a closed loopback port.
#[must_use]
pub fn unreachable_telegram() -> TelegramConfig {
    telegram_config(Url::parse("http://127.0.0.1:9").expect("valid URL"))
}
