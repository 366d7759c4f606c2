//! Integration tests for order submission.
//!
//! Orders are delivered to a fake Telegram API, so these tests check both
//! the response to the customer and the message the store owner receives.

use axum::http::StatusCode;
use serde_json::{Value, json};

use mark_store_core::{CategoryId, NewProduct};
use mark_store_integration_tests::{
    FakeTelegram, TEST_BOT_TOKEN, TEST_CHAT_ID, TestServer, unreachable_telegram,
};

async fn add_products(server: &TestServer) {
    for (name, price) in [("Mouse <Pro>", "12500"), ("Cable", "2750.50")] {
        let (status, _) = server
            .post_json(
                "/api/products",
                &json!({
                    "name": name,
                    "description": "Accessory",
                    "price": price,
                    "image": "/images/accessory.png",
                    "categoryId": 1,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

fn order(items: &Value) -> Value {
    json!({
        "fullName": "علي حسن كريم",
        "phone": "07701234567",
        "province": "بغداد",
        "city": "الكرادة",
        "notes": "Call before delivery",
        "items": items,
    })
}

#[tokio::test]
async fn test_order_is_priced_and_delivered() {
    let telegram = FakeTelegram::start().await;
    let server = TestServer::with_telegram(telegram.config()).await;
    add_products(&server).await;

    let (status, body) = server
        .post_json(
            "/api/orders",
            &order(&json!([
                {"productId": 1, "quantity": 2},
                {"productId": 2, "quantity": 1},
            ])),
        )
        .await;
    assert_eq!(status, StatusCode::ACCEPTED, "{body}");
    assert_eq!(body["subtotal"], "27750.50");
    assert_eq!(body["deliveryFee"], "5000.00");
    assert_eq!(body["total"], "32750.50");
    assert_eq!(body["lines"][0]["lineTotal"], "25000.00");
    assert_eq!(body["customer"]["province"], "بغداد");

    let messages = telegram.messages();
    assert_eq!(messages.len(), 1);
    let sent = &messages[0];
    assert_eq!(sent.bot, format!("bot{TEST_BOT_TOKEN}"));
    assert_eq!(sent.body["chat_id"], TEST_CHAT_ID);
    assert_eq!(sent.body["parse_mode"], "HTML");

    let text = sent.body["text"].as_str().expect("message text");
    assert!(text.contains("الاسم: علي حسن كريم"));
    assert!(text.contains("• Mouse &lt;Pro&gt; - الكمية: 2 - السعر: 12,500 د.ع"));
    assert!(text.contains("الملاحظات: Call before delivery"));
    assert!(text.contains("المجموع الكلي: 32,750.5 د.ع"));
}

#[tokio::test]
async fn test_client_prices_are_ignored() {
    let telegram = FakeTelegram::start().await;
    let server = TestServer::with_telegram(telegram.config()).await;
    add_products(&server).await;

    let (status, body) = server
        .post_json(
            "/api/orders",
            &order(&json!([{"productId": 2, "quantity": 1, "price": "1"}])),
        )
        .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["lines"][0]["unitPrice"], "2750.50");
}

#[tokio::test]
async fn test_unreachable_telegram_is_bad_gateway() {
    let server = TestServer::with_telegram(unreachable_telegram()).await;
    add_products(&server).await;

    let (status, body) = server
        .post_json("/api/orders", &order(&json!([{"productId": 1, "quantity": 1}])))
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to send order, please try again");
}

#[tokio::test]
async fn test_rejected_message_is_bad_gateway() {
    let telegram = FakeTelegram::rejecting().await;
    let server = TestServer::with_telegram(telegram.config()).await;
    add_products(&server).await;

    let (status, body) = server
        .post_json("/api/orders", &order(&json!([{"productId": 1, "quantity": 1}])))
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body["error"].as_str().expect("error").contains("chat not found"));
    assert_eq!(telegram.messages().len(), 1);
}

#[tokio::test]
async fn test_orders_unavailable_without_telegram() {
    let server = TestServer::start().await;
    add_products(&server).await;

    let (status, _) = server
        .post_json("/api/orders", &order(&json!([{"productId": 1, "quantity": 1}])))
        .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_invalid_orders_are_not_sent() {
    let telegram = FakeTelegram::start().await;
    let server = TestServer::with_telegram(telegram.config()).await;
    add_products(&server).await;

    let (status, _) = server
        .post_json("/api/orders", &order(&json!([{"productId": 9, "quantity": 1}])))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server
        .post_json("/api/orders", &order(&json!([{"productId": 1, "quantity": 0}])))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut elsewhere = order(&json!([{"productId": 1, "quantity": 1}]));
    elsewhere["province"] = json!("Cairo");
    let (status, body) = server.post_json("/api/orders", &elsewhere).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error").contains("province"));

    assert!(telegram.messages().is_empty());
}

#[tokio::test]
async fn test_oversized_orders_are_rejected() {
    let telegram = FakeTelegram::start().await;
    let server = TestServer::with_telegram(telegram.config()).await;
    add_products(&server).await;

    let (status, body) = server
        .post_json(
            "/api/products",
            &json!({
                "name": "Vault",
                "description": "Too expensive",
                "price": "100000000000000000000",
                "image": "/images/vault.png",
                "categoryId": 1,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error").contains("99999999.99"));

    let (status, _) = server
        .post_json(
            "/api/orders",
            &order(&json!([{"productId": 1, "quantity": 4_294_967_295_u32}])),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Direct store writes skip the price ceiling.
    let vault = server.store.create_product(NewProduct {
        name: "Vault".to_string(),
        description: "Too expensive".to_string(),
        price: "79228162514264337593543950335".parse().expect("price"),
        image: "/images/vault.png".to_string(),
        category_id: CategoryId::new(1),
    });
    let (status, body) = server
        .post_json(
            "/api/orders",
            &order(&json!([{"productId": vault.id, "quantity": 2}])),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "order total is too large");

    assert!(telegram.messages().is_empty());
}
