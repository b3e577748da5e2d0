//! Integration tests for the order endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{app, get, json_body, json_request};

/// Fetch a seeded product's id and price off the catalog endpoint.
async fn first_product(app: &axum::Router) -> (String, String) {
    let products = json_body(
        app.clone()
            .oneshot(get("/api/products"))
            .await
            .expect("response"),
    )
    .await;
    (
        products[0]["id"].as_str().expect("id").to_string(),
        products[0]["price"].as_str().expect("price").to_string(),
    )
}

#[tokio::test]
async fn test_create_order_computes_total_and_persists_items() {
    let app = app();
    let (product_id, _) = first_product(&app).await;
    let user_id = uuid::Uuid::new_v4();

    let body = json!({
        "userId": user_id,
        "deliveryAddress": "House 12, Street 4, Chakwal",
        "items": [{"productId": product_id, "quantity": 2, "price": "100"}]
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/orders", &body))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let created = json_body(response).await;
    assert_eq!(created["totalAmount"].as_str(), Some("200"));
    assert_eq!(created["status"].as_str(), Some("pending"));
    let items = created["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 2);
    assert_eq!(items[0]["price"].as_str(), Some("100"));

    // The detail endpoint returns the same join
    let id = created["id"].as_str().expect("id");
    let detail = json_body(
        app.oneshot(get(&format!("/api/orders/{id}")))
            .await
            .expect("response"),
    )
    .await;
    assert_eq!(detail["items"].as_array().expect("items").len(), 1);
}

#[tokio::test]
async fn test_create_order_validation_lists_fields() {
    let body = json!({
        "items": [{"quantity": 0}]
    });
    let response = app()
        .oneshot(json_request("POST", "/api/orders", &body))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = json_body(response).await;
    let fields: Vec<_> = error["errors"]
        .as_array()
        .expect("errors")
        .iter()
        .map(|e| e["field"].as_str().expect("field").to_string())
        .collect();
    assert!(fields.contains(&"userId".to_string()));
    assert!(fields.contains(&"deliveryAddress".to_string()));
    assert!(fields.contains(&"items[0].productId".to_string()));
    assert!(fields.contains(&"items[0].quantity".to_string()));
    assert!(fields.contains(&"items[0].price".to_string()));
}

#[tokio::test]
async fn test_orders_list_scoped_by_user() {
    let app = app();
    let (product_id, price) = first_product(&app).await;
    let user_a = uuid::Uuid::new_v4();
    let user_b = uuid::Uuid::new_v4();

    for user in [user_a, user_a, user_b] {
        let body = json!({
            "userId": user,
            "deliveryAddress": "Somewhere",
            "items": [{"productId": product_id, "quantity": 1, "price": price}]
        });
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/orders", &body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let all = json_body(
        app.clone()
            .oneshot(get("/api/orders"))
            .await
            .expect("response"),
    )
    .await;
    assert_eq!(all.as_array().expect("array").len(), 3);

    let scoped = json_body(
        app.oneshot(get(&format!("/api/orders?userId={user_a}")))
            .await
            .expect("response"),
    )
    .await;
    let scoped = scoped.as_array().expect("array");
    assert_eq!(scoped.len(), 2);
    for order in scoped {
        assert_eq!(order["userId"].as_str(), Some(user_a.to_string().as_str()));
    }
}

#[tokio::test]
async fn test_get_order_not_found() {
    let response = app()
        .oneshot(get(&format!("/api/orders/{}", uuid::Uuid::new_v4())))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_status_round_trip() {
    let app = app();
    let (product_id, price) = first_product(&app).await;

    let body = json!({
        "userId": uuid::Uuid::new_v4(),
        "deliveryAddress": "Somewhere",
        "items": [{"productId": product_id, "quantity": 1, "price": price}]
    });
    let created = json_body(
        app.clone()
            .oneshot(json_request("POST", "/api/orders", &body))
            .await
            .expect("response"),
    )
    .await;
    let id = created["id"].as_str().expect("id");

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/orders/{id}/status"),
            &json!({"status": "delivering"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let updated = json_body(response).await;
    assert_eq!(updated["status"].as_str(), Some("delivering"));

    let created_at =
        chrono::DateTime::parse_from_rfc3339(updated["createdAt"].as_str().expect("createdAt"))
            .expect("timestamp");
    let updated_at =
        chrono::DateTime::parse_from_rfc3339(updated["updatedAt"].as_str().expect("updatedAt"))
            .expect("timestamp");
    assert!(updated_at >= created_at);
}

#[tokio::test]
async fn test_update_status_missing_field_is_400() {
    let response = app()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/orders/{}/status", uuid::Uuid::new_v4()),
            &json!({}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_status_rejects_unknown_value() {
    let response = app()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/orders/{}/status", uuid::Uuid::new_v4()),
            &json!({"status": "teleported"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_status_missing_order_is_404() {
    let response = app()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/orders/{}/status", uuid::Uuid::new_v4()),
            &json!({"status": "delivered"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
