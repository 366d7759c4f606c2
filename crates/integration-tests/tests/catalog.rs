//! Integration tests for categories, products and the browse view.

use axum::http::StatusCode;
use serde_json::{Value, json};

use mark_store_core::{NewCategory, NewProduct, Price};
use mark_store_integration_tests::TestServer;

fn product(name: &str, price: &str, category_id: i64) -> Value {
    json!({
        "name": name,
        "description": format!("{name} description"),
        "price": price,
        "image": "https://cdn.example.com/item.png",
        "categoryId": category_id,
    })
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::start().await;
    let response = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.text().await.expect("body"), "ok");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await;
    let response = server
        .client
        .get(server.url("/api/categories"))
        .header("x-request-id", "req-42")
        .send()
        .await
        .expect("request failed");
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-42")
    );
}

#[tokio::test]
async fn test_products_survive_category_deletion() {
    let server = TestServer::start().await;

    let (status, phones) = server
        .post_json("/api/categories", &json!({"name": "Phones"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(phones["name"], "Phones");
    let phones_id = phones["id"].as_i64().expect("category id");

    let (status, x1) = server
        .post_json("/api/products", &product("X1", "100.00", phones_id))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(x1["price"], "100.00");
    assert_eq!(x1["categoryId"], phones_id);

    let path = format!("/api/categories/{phones_id}/products");
    let (status, listed) = server.get_json(&path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([x1.clone()]));

    let status = server.delete(&format!("/api/categories/{phones_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = server
        .get_json(&format!("/api/categories/{phones_id}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = server.get_json(&path).await;
    assert_eq!(listed, json!([x1]));
}

#[tokio::test]
async fn test_duplicate_category_names_accepted() {
    let server = TestServer::start().await;

    let (_, first) = server
        .post_json("/api/categories", &json!({"name": "Phones"}))
        .await;
    let (status, second) = server
        .post_json("/api/categories", &json!({"name": " Phones "}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["name"], "Phones");
    assert_ne!(first["id"], second["id"]);

    let (_, all) = server.get_json("/api/categories").await;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let server = TestServer::start().await;

    let (_, a) = server.post_json("/api/products", &product("A", "1", 1)).await;
    let (_, b) = server.post_json("/api/products", &product("B", "2", 1)).await;
    assert_eq!(server.delete("/api/products/2").await, StatusCode::NO_CONTENT);
    assert_eq!(server.delete("/api/products/2").await, StatusCode::NOT_FOUND);
    let (_, c) = server.post_json("/api/products", &product("C", "3", 1)).await;

    assert_eq!(a["id"], 1);
    assert_eq!(b["id"], 2);
    assert_eq!(c["id"], 3);

    let (_, all) = server.get_json("/api/products").await;
    let names: Vec<&str> = all
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, ["A", "C"]);
}

#[tokio::test]
async fn test_partial_update_changes_only_given_fields() {
    let server = TestServer::start().await;
    let (_, created) = server
        .post_json("/api/products", &product("X1", "100.00", 1))
        .await;

    let (status, updated) = server
        .put_json("/api/products/1", &json!({"price": "19.99"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], "19.99");
    for field in ["id", "name", "description", "image", "categoryId"] {
        assert_eq!(updated[field], created[field], "{field} changed");
    }

    let (status, patched) = server
        .patch_json("/api/products/1", &json!({"name": "X1 Pro", "id": 99}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "X1 Pro");
    assert_eq!(patched["id"], 1);
    assert_eq!(patched["price"], "19.99");
}

#[tokio::test]
async fn test_update_unknown_product_is_not_found() {
    let server = TestServer::start().await;
    server
        .post_json("/api/products", &product("X1", "100.00", 1))
        .await;

    let (status, body) = server
        .put_json("/api/products/7", &json!({"price": "19.99"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().is_some());

    let (_, all) = server.get_json("/api/products").await;
    assert_eq!(all[0]["price"], "100.00");
}

#[tokio::test]
async fn test_products_filtered_by_category_query() {
    let server = TestServer::start().await;
    server.post_json("/api/products", &product("X1", "1", 1)).await;
    server.post_json("/api/products", &product("Case", "1", 2)).await;
    server.post_json("/api/products", &product("Z5", "1", 1)).await;

    let (status, filtered) = server.get_json("/api/products?categoryId=1").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = filtered
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, ["X1", "Z5"]);
}

#[tokio::test]
async fn test_invalid_input_is_rejected() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post_json("/api/categories", &json!({"name": "  "}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");

    let (status, _) = server
        .post_json("/api/products", &product("X1", "0", 1))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server.get_json("/api/products/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(server.store.get_all_products().is_empty());
}

#[tokio::test]
async fn test_browse_view_labels_orphans() {
    let server = TestServer::start().await;
    server
        .post_json("/api/categories", &json!({"name": "Phones"}))
        .await;
    server
        .post_json("/api/categories", &json!({"name": "Cases"}))
        .await;
    server.post_json("/api/products", &product("X1", "100", 1)).await;
    server.post_json("/api/products", &product("Cover", "10", 2)).await;
    server.delete("/api/categories/1").await;

    let (status, entries) = server.get_json("/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entries[0]["categoryName"], "Unknown");
    assert_eq!(entries[1]["categoryName"], "Cases");

    let (_, found) = server.get_json("/api/catalog?q=cov").await;
    assert_eq!(found.as_array().map(Vec::len), Some(1));
    assert_eq!(found[0]["name"], "Cover");

    let (_, by_category) = server.get_json("/api/catalog?category=Cases").await;
    assert_eq!(by_category.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_store_writes_are_served() {
    let server = TestServer::start().await;
    let category = server.store.create_category(NewCategory {
        name: "Chargers".to_string(),
    });
    server.store.create_product(NewProduct {
        name: "C20".to_string(),
        description: "Fast charger".to_string(),
        price: Price::from_whole(15000),
        image: "/images/c20.png".to_string(),
        category_id: category.id,
    });

    let path = format!("/api/categories/{}/products", category.id);
    let (status, products) = server.get_json(&path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products[0]["name"], "C20");
    assert_eq!(products[0]["price"], "15000.00");
}
