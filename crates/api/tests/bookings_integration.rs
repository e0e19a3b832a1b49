//! Integration tests for the public booking endpoints.
//!
//! These run against the full router with a lazy pool; every asserted
//! path is resolved before a database query would be issued.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{create_test_app, get_request, json_request, parse_response_body};

fn valid_booking_body() -> serde_json::Value {
    json!({
        "name": "Amina Yusuf",
        "email": "amina@example.com",
        "phoneNumber": "+44 7700 900123",
        "country": "United Kingdom",
        "checkInDate": "2027-07-10",
        "checkOutDate": "2027-07-15",
        "quadRooms": 2,
        "doubleRooms": 1,
        "numberOfAdults": 9,
        "numberOfChildren": 3
    })
}

#[tokio::test]
async fn test_liveness_returns_alive() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/health/live"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_create_booking_rejects_invalid_email() {
    let app = create_test_app();

    let mut body = valid_booking_body();
    body["email"] = json!("not-an-email");

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/hotels/grand-plaza/bookings",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_create_booking_rejects_empty_name() {
    let app = create_test_app();

    let mut body = valid_booking_body();
    body["name"] = json!("");

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/hotels/grand-plaza/bookings",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_booking_rejects_negative_room_count() {
    let app = create_test_app();

    let mut body = valid_booking_body();
    body["tripleRooms"] = json!(-2);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/hotels/grand-plaza/bookings",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_booking_rejects_checkout_before_checkin() {
    let app = create_test_app();

    let mut body = valid_booking_body();
    body["checkInDate"] = json!("2027-07-15");
    body["checkOutDate"] = json!("2027-07-10");

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/hotels/grand-plaza/bookings",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_create_booking_rejects_same_day_stay() {
    let app = create_test_app();

    let mut body = valid_booking_body();
    body["checkInDate"] = json!("2027-07-10");
    body["checkOutDate"] = json!("2027-07-10");

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/hotels/grand-plaza/bookings",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_bookings_requires_email() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/v1/bookings"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_list_bookings_rejects_blank_email() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/v1/bookings?email=%20%20"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_booking_rejects_malformed_id() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/v1/bookings/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_notify_hotels_rejects_empty_recipient_list() {
    let app = create_test_app();

    let body = json!({
        "hotelIds": [],
        "checkInDate": "2027-07-10",
        "checkOutDate": "2027-07-15",
        "quadRooms": 2
    });

    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/notify/hotels", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_notify_hotels_rejects_inverted_dates() {
    let app = create_test_app();

    let body = json!({
        "hotelIds": ["4f9c1d34-9d9d-4fe4-90a5-2f1f5f6d7a01"],
        "checkInDate": "2027-07-15",
        "checkOutDate": "2027-07-10"
    });

    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/notify/hotels", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/health/live"))
        .await
        .unwrap();

    assert!(response.headers().contains_key("X-Request-ID"));
    assert_eq!(
        response.headers().get("X-Content-Type-Options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("X-Frame-Options").unwrap(), "DENY");
}
