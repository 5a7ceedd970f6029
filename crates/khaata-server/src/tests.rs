//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use khaata_core::db::Database;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    let db = Database::in_memory().unwrap();
    create_router(db, None)
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn sample_transaction(amount: f64, kind: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "amount": amount,
        "kind": kind,
        "category": "Sales",
        "date": date,
    })
}

// ========== Transaction API Tests ==========

#[tokio::test]
async fn test_create_and_list_transactions() {
    let app = setup_test_app();

    let response = post_json(
        &app,
        "/api/transactions",
        sample_transaction(1500.0, "income", "2025-01-15"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let created = get_body_json(response).await;
    assert_eq!(created["amount"], 1500.0);
    assert_eq!(created["kind"], "income");

    let response = get(&app, "/api/transactions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["transactions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_transaction_rejects_bad_input() {
    let app = setup_test_app();

    // Non-positive amount
    let response = post_json(
        &app,
        "/api/transactions",
        sample_transaction(0.0, "income", "2025-01-15"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown kind
    let response = post_json(
        &app,
        "/api/transactions",
        sample_transaction(10.0, "transfer", "2025-01-15"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Bad date
    let response = post_json(
        &app,
        "/api/transactions",
        sample_transaction(10.0, "income", "15/01/2025"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_transaction() {
    let app = setup_test_app();

    let response = post_json(
        &app,
        "/api/transactions",
        sample_transaction(100.0, "expense", "2025-02-01"),
    )
    .await;
    let created = get_body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/transactions/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Deleting again is a 404
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/transactions/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reset_clears_ledger() {
    let app = setup_test_app();

    post_json(
        &app,
        "/api/transactions",
        sample_transaction(100.0, "income", "2025-02-01"),
    )
    .await;
    post_json(
        &app,
        "/api/transactions",
        sample_transaction(50.0, "expense", "2025-02-02"),
    )
    .await;

    let response = post_json(&app, "/api/transactions/reset", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["cleared"], 2);

    let json = get_body_json(get(&app, "/api/transactions").await).await;
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_sms_transaction_entry_and_dedup() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "message": "Debited Rs 500 from A/C XX1234 on 01-Jan-2025"
    });

    let response = post_json(&app, "/api/transactions/sms", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let created = get_body_json(response).await;
    assert_eq!(created["amount"], 500.0);
    assert_eq!(created["kind"], "expense");
    assert_eq!(created["category"], "SMS Import");
    assert_eq!(created["date"], "2025-01-01");

    // Same SMS again conflicts
    let response = post_json(&app, "/api/transactions/sms", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Unparseable SMS is a 400
    let response = post_json(
        &app,
        "/api/transactions/sms",
        serde_json::json!({"message": "Your OTP is 123456"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Dashboard / Report API Tests ==========

#[tokio::test]
async fn test_dashboard_empty_ledger() {
    let app = setup_test_app();

    let response = get(&app, "/api/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["transaction_count"], 0);
    assert_eq!(json["monthly"][0]["month"], "No data");
    assert_eq!(json["prediction"]["income"], 0.0);
    assert_eq!(json["active_alerts"], 0);
}

#[tokio::test]
async fn test_dashboard_totals_and_forecast() {
    let app = setup_test_app();

    post_json(
        &app,
        "/api/transactions",
        sample_transaction(1000.0, "income", "2025-01-10"),
    )
    .await;
    post_json(
        &app,
        "/api/transactions",
        sample_transaction(1000.0, "income", "2025-02-10"),
    )
    .await;

    let json = get_body_json(get(&app, "/api/dashboard").await).await;
    assert_eq!(json["total_income"], 1000.0 + 1000.0);
    assert_eq!(json["current_balance"], 2000.0);
    assert_eq!(json["monthly"].as_array().unwrap().len(), 2);

    // Flat two-month series: prediction equals the monthly average
    let forecast = get_body_json(get(&app, "/api/forecast").await).await;
    assert_eq!(forecast["income"], 1000.0);
    assert_eq!(forecast["expenses"], 0.0);
    assert_eq!(forecast["profit"], 1000.0);
}

#[tokio::test]
async fn test_monthly_report_first_seen_order() {
    let app = setup_test_app();

    post_json(
        &app,
        "/api/transactions",
        sample_transaction(100.0, "income", "2025-03-01"),
    )
    .await;
    post_json(
        &app,
        "/api/transactions",
        sample_transaction(50.0, "expense", "2025-01-20"),
    )
    .await;

    let json = get_body_json(get(&app, "/api/reports/monthly").await).await;
    let buckets = json.as_array().unwrap();
    // Timestamp order puts January first
    assert_eq!(buckets[0]["month"], "Jan");
    assert_eq!(buckets[1]["month"], "Mar");
}

// ========== Alert API Tests ==========

#[tokio::test]
async fn test_alerts_fire_on_tight_books() {
    let app = setup_test_app();

    post_json(
        &app,
        "/api/transactions",
        sample_transaction(10_000.0, "income", "2025-01-10"),
    )
    .await;
    post_json(
        &app,
        "/api/transactions",
        sample_transaction(8_500.0, "expense", "2025-01-20"),
    )
    .await;

    let json = get_body_json(get(&app, "/api/alerts").await).await;
    let alerts = json.as_array().unwrap();

    // Expense ratio 85% and balance 1500: warning + danger, in rule order
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0]["kind"], "warning");
    assert_eq!(alerts[0]["priority"], "high");
    assert_eq!(alerts[1]["kind"], "danger");
}

#[tokio::test]
async fn test_notify_alerts_persists_insights() {
    let app = setup_test_app();

    post_json(
        &app,
        "/api/transactions",
        sample_transaction(10_000.0, "income", "2025-01-10"),
    )
    .await;
    post_json(
        &app,
        "/api/transactions",
        sample_transaction(8_500.0, "expense", "2025-01-20"),
    )
    .await;

    let response = post_json(&app, "/api/alerts/notify", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["evaluated"], 2);
    assert_eq!(json["sent"], 2);

    let json = get_body_json(get(&app, "/api/notifications").await).await;
    let notes = json["notifications"].as_array().unwrap();
    // 2 transaction notifications + 2 alert insights
    assert_eq!(notes.len(), 4);
    assert_eq!(json["unread"], 4);
}

// ========== Notification API Tests ==========

#[tokio::test]
async fn test_notification_read_flow() {
    let app = setup_test_app();

    post_json(
        &app,
        "/api/transactions",
        sample_transaction(100.0, "income", "2025-01-10"),
    )
    .await;

    let json = get_body_json(get(&app, "/api/notifications").await).await;
    let id = json["notifications"][0]["id"].as_i64().unwrap();
    assert_eq!(json["unread"], 1);

    let response = post_json(
        &app,
        &format!("/api/notifications/{}/read", id),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(get(&app, "/api/notifications").await).await;
    assert_eq!(json["unread"], 0);
    assert_eq!(json["notifications"][0]["is_read"], true);
}

#[tokio::test]
async fn test_preferences_suppress_transaction_notifications() {
    let app = setup_test_app();

    // Disable expense notifications
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/preferences")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::json!({"notify_on_expense": false}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    post_json(
        &app,
        "/api/transactions",
        sample_transaction(100.0, "expense", "2025-01-10"),
    )
    .await;

    let json = get_body_json(get(&app, "/api/notifications").await).await;
    assert_eq!(json["notifications"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_preferences_round_trip() {
    let app = setup_test_app();

    let json = get_body_json(get(&app, "/api/preferences").await).await;
    assert_eq!(json["app_notifications_enabled"], true);
    assert_eq!(json["sms_alerts_enabled"], false);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/preferences")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "sms_alerts_enabled": true,
                        "phone_number": "+91 98765 43210",
                        "expense_threshold": 1000.0
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["sms_alerts_enabled"], true);
    assert_eq!(json["phone_number"], "+91 98765 43210");
    assert_eq!(json["expense_threshold"], 1000.0);
}

// ========== Credit & Export API Tests ==========

#[tokio::test]
async fn test_credit_overview() {
    let app = setup_test_app();

    let response = get(&app, "/api/credit").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["score"], 720);
    assert_eq!(json["max_score"], 900);
    assert_eq!(json["rating_label"], "Good");
    assert_eq!(json["factors"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_export_transactions_csv() {
    let app = setup_test_app();

    post_json(
        &app,
        "/api/transactions",
        sample_transaction(1500.0, "income", "2025-01-15"),
    )
    .await;

    let response = get(&app, "/api/export/transactions").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/csv; charset=utf-8"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("id,date,kind,category,amount"));
    assert!(text.contains("Sales"));
}
