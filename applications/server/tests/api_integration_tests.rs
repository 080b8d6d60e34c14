/// API integration tests
/// Tests complete HTTP request/response cycles with a real database
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{create_test_app, multipart_body, multipart_content_type};
use tower::util::ServiceExt;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

fn nine10_payload() -> serde_json::Value {
    serde_json::json!({
        "user_name": "nine10",
        "first_name": "Kao",
        "last_name": "Ten",
        "date_of_birth": "2000-01-01"
    })
}

/// Test GET /accounts with an empty database
#[tokio::test]
async fn test_list_accounts_empty() {
    let test_app = create_test_app().await;

    let request = Request::builder()
        .uri("/accounts")
        .body(Body::empty())
        .unwrap();

    let response = test_app.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let accounts = response_json(response).await;
    assert_eq!(accounts, serde_json::json!([]));
}

/// Test POST /accounts followed by GET /accounts
#[tokio::test]
async fn test_create_account_then_list() {
    let test_app = create_test_app().await;

    let response = test_app
        .app
        .clone()
        .oneshot(json_request("POST", "/accounts", nine10_payload()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let created = response_json(response).await;
    assert_eq!(created["user_name"], "nine10");
    assert_eq!(created["first_name"], "Kao");
    assert_eq!(created["last_name"], "Ten");
    assert_eq!(created["date_of_birth"], "2000-01-01");
    assert!(!created["_id"].as_str().unwrap().is_empty());
    assert!(created["create_at"].is_string());

    // The new account shows up in the listing
    let request = Request::builder()
        .uri("/accounts")
        .body(Body::empty())
        .unwrap();
    let response = test_app.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let accounts = response_json(response).await;
    assert_eq!(accounts.as_array().unwrap().len(), 1);
    assert_eq!(accounts[0]["_id"], created["_id"]);
}

/// Test that a second account with the same user_name is rejected
#[tokio::test]
async fn test_create_duplicate_user_name() {
    let test_app = create_test_app().await;

    let response = test_app
        .app
        .clone()
        .oneshot(json_request("POST", "/accounts", nine10_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same handle, different person
    let second = serde_json::json!({
        "user_name": "nine10",
        "first_name": "Somchai",
        "last_name": "Sit",
        "date_of_birth": "1995-06-15"
    });

    let response = test_app
        .app
        .oneshot(json_request("POST", "/accounts", second))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Error creating account");
    assert!(body["error"].is_string());
}

/// Test that a blank required field is rejected with the error envelope
#[tokio::test]
async fn test_create_with_blank_field() {
    let test_app = create_test_app().await;

    let payload = serde_json::json!({
        "user_name": "nine10",
        "first_name": "Kao",
        "last_name": "",
        "date_of_birth": "2000-01-01"
    });

    let response = test_app
        .app
        .oneshot(json_request("POST", "/accounts", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Error creating account");
    assert!(body["error"].as_str().unwrap().contains("last_name"));
}

/// Test PUT /accounts/:id on an unknown ID
#[tokio::test]
async fn test_update_unknown_account() {
    let test_app = create_test_app().await;

    let response = test_app
        .app
        .oneshot(json_request(
            "PUT",
            "/accounts/no-such-id",
            serde_json::json!({ "first_name": "Somchai" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Account not found");
}

/// Test PUT /accounts/:id applying only the provided fields
#[tokio::test]
async fn test_update_applies_partial_body() {
    let test_app = create_test_app().await;

    let response = test_app
        .app
        .clone()
        .oneshot(json_request("POST", "/accounts", nine10_payload()))
        .await
        .unwrap();
    let created = response_json(response).await;
    let id = created["_id"].as_str().unwrap();

    let response = test_app
        .app
        .oneshot(json_request(
            "PUT",
            &format!("/accounts/{id}"),
            serde_json::json!({ "first_name": "Somchai" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated = response_json(response).await;
    assert_eq!(updated["first_name"], "Somchai");
    assert_eq!(updated["user_name"], "nine10");
    assert_eq!(updated["last_name"], "Ten");
    assert_eq!(updated["date_of_birth"], "2000-01-01");
    assert_eq!(updated["create_at"], created["create_at"]);
}

/// Test that a blank first_name in the body leaves the stored value alone
#[tokio::test]
async fn test_update_with_blank_field_keeps_stored_value() {
    let test_app = create_test_app().await;

    let response = test_app
        .app
        .clone()
        .oneshot(json_request("POST", "/accounts", nine10_payload()))
        .await
        .unwrap();
    let created = response_json(response).await;
    let id = created["_id"].as_str().unwrap();

    let response = test_app
        .app
        .oneshot(json_request(
            "PUT",
            &format!("/accounts/{id}"),
            serde_json::json!({ "first_name": "", "last_name": "Sit" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated = response_json(response).await;
    assert_eq!(updated["first_name"], "Kao");
    assert_eq!(updated["last_name"], "Sit");
}

/// Test uploading a JPEG to the shop surface and streaming it back
#[tokio::test]
async fn test_upload_and_serve_image() {
    let test_app = create_test_app().await;

    let data = b"not really a jpeg but close enough";
    let request = Request::builder()
        .uri("/images/shop")
        .method("POST")
        .header(header::CONTENT_TYPE, multipart_content_type())
        .body(Body::from(multipart_body("gloves.jpg", "image/jpeg", data)))
        .unwrap();

    let response = test_app.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    let stored_name = body["files"][0].as_str().unwrap().to_string();
    assert!(stored_name.starts_with("shop/"));
    assert!(stored_name.ends_with(".jpg"));

    // Stream it back
    let request = Request::builder()
        .uri(format!("/images/{stored_name}"))
        .body(Body::empty())
        .unwrap();
    let response = test_app.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "image/jpeg"
    );

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body_bytes[..], data);
}

/// Test that a text file is rejected before anything is stored
#[tokio::test]
async fn test_upload_rejects_text_file() {
    let test_app = create_test_app().await;

    let request = Request::builder()
        .uri("/images/shop")
        .method("POST")
        .header(header::CONTENT_TYPE, multipart_content_type())
        .body(Body::from(multipart_body(
            "notes.txt",
            "text/plain",
            b"just text",
        )))
        .unwrap();

    let response = test_app.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid file type: text/plain"));
}

/// Test that a JPEG over the size ceiling is rejected
#[tokio::test]
async fn test_upload_rejects_oversized_image() {
    let test_app = create_test_app().await;

    // 6 MiB payload against the 5 MiB ceiling
    let data = [0u8; 1024].repeat(6 * 1024);
    let request = Request::builder()
        .uri("/images/shop")
        .method("POST")
        .header(header::CONTENT_TYPE, multipart_content_type())
        .body(Body::from(multipart_body("big.jpg", "image/jpeg", &data)))
        .unwrap();

    let response = test_app.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("File too large"));
}

/// Test that GIFs are allowed for gyms but not for shop listings
#[tokio::test]
async fn test_gif_policy_differs_by_surface() {
    let test_app = create_test_app().await;

    let gif = b"GIF89a fake";

    let request = Request::builder()
        .uri("/images/shop")
        .method("POST")
        .header(header::CONTENT_TYPE, multipart_content_type())
        .body(Body::from(multipart_body("ring.gif", "image/gif", gif)))
        .unwrap();
    let response = test_app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .uri("/images/gym")
        .method("POST")
        .header(header::CONTENT_TYPE, multipart_content_type())
        .body(Body::from(multipart_body("ring.gif", "image/gif", gif)))
        .unwrap();
    let response = test_app.app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Test GET /images/* for a name that was never stored
#[tokio::test]
async fn test_serve_unknown_image() {
    let test_app = create_test_app().await;

    let request = Request::builder()
        .uri("/images/shop/does-not-exist.jpg")
        .body(Body::empty())
        .unwrap();

    let response = test_app.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

/// Test GET /health
#[tokio::test]
async fn test_health() {
    let test_app = create_test_app().await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = test_app.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}
