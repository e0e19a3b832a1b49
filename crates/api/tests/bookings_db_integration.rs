//! Database-backed integration tests for the booking lifecycle.
//!
//! These run against a real PostgreSQL instance (`TEST_DATABASE_URL`, or
//! the default local test database) and exercise the stateful paths:
//! create, track, authenticate, respond, and the answered-exactly-once
//! guard. Every test seeds its own hotel with a unique code so the tests
//! can run in parallel.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{
    get_request, get_request_with_auth, json_request, json_request_with_auth,
    parse_response_body, seed_test_hotel, setup_db_test_app, unique_test_email,
};

fn booking_body(email: &str) -> serde_json::Value {
    json!({
        "name": "Amina Yusuf",
        "email": email,
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

async fn create_booking(
    app: &axum::Router,
    hotel_code: &str,
    email: &str,
) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/hotels/{}/bookings", hotel_code),
            booking_body(email),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await
}

async fn login(app: &axum::Router, hotel_code: &str, pass_code: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/admin/login",
            json!({ "hotelCode": hotel_code, "passCode": pass_code }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_booking_starts_pending() {
    let (app, pool) = setup_db_test_app().await;
    let (_, code) = seed_test_hotel(&pool, "pass-1234").await;

    let booking = create_booking(&app, &code, &unique_test_email()).await;

    assert_eq!(booking["hotelCode"], json!(code));
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["quote"], serde_json::Value::Null);
    assert_eq!(booking["declineReason"], serde_json::Value::Null);
    assert_eq!(booking["quadRooms"], 2);
    assert!(booking["id"].as_str().is_some());
}

#[tokio::test]
async fn test_create_booking_unknown_hotel_is_404() {
    let (app, _pool) = setup_db_test_app().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/hotels/no-such-hotel/bookings",
            booking_body(&unique_test_email()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_tracking_lookup_normalizes_email() {
    let (app, pool) = setup_db_test_app().await;
    let (_, code) = seed_test_hotel(&pool, "pass-1234").await;

    // Stored lowercased even when the form submits mixed case
    let email = unique_test_email();
    let mixed_case = email.to_uppercase();
    let booking = create_booking(&app, &code, &mixed_case).await;
    assert_eq!(booking["email"], json!(email));

    let response = app
        .oneshot(get_request(&format!("/api/v1/bookings?email={}", email)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["id"], booking["id"]);
}

#[tokio::test]
async fn test_get_booking_by_id() {
    let (app, pool) = setup_db_test_app().await;
    let (_, code) = seed_test_hotel(&pool, "pass-1234").await;

    let booking = create_booking(&app, &code, &unique_test_email()).await;
    let id = booking["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/bookings/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["id"], booking["id"]);
    assert_eq!(body["status"], "pending");

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/bookings/{}",
            uuid::Uuid::new_v4()
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_returns_session_token() {
    let (app, pool) = setup_db_test_app().await;
    let (id, code) = seed_test_hotel(&pool, "pass-1234").await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/admin/login",
            json!({ "hotelCode": code, "passCode": "pass-1234" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["expiresIn"], 3600);
    assert_eq!(body["hotel"]["id"], json!(id.to_string()));
    assert_eq!(body["hotel"]["code"], json!(code));
}

#[tokio::test]
async fn test_login_failures_are_uniform_401() {
    let (app, pool) = setup_db_test_app().await;
    let (_, code) = seed_test_hotel(&pool, "pass-1234").await;

    // Wrong pass-code and unknown hotel code get the same answer, so the
    // login endpoint does not leak which codes exist.
    for (hotel_code, pass_code) in [(code.as_str(), "wrong-pass"), ("no-such-hotel", "pass-1234")]
    {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/admin/login",
                json!({ "hotelCode": hotel_code, "passCode": pass_code }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = parse_response_body(response).await;
        assert_eq!(body["error"], "unauthorized");
        assert_eq!(body["message"], "Invalid hotel code or pass-code");
    }
}

#[tokio::test]
async fn test_respond_confirm_sets_quote() {
    let (app, pool) = setup_db_test_app().await;
    let (_, code) = seed_test_hotel(&pool, "pass-1234").await;
    let booking = create_booking(&app, &code, &unique_test_email()).await;
    let token = login(&app, &code, "pass-1234").await;

    let response = app
        .oneshot(json_request_with_auth(
            Method::POST,
            &format!("/api/v1/admin/bookings/{}/respond", booking["id"].as_str().unwrap()),
            json!({ "decision": "confirm", "detail": "$450/night, breakfast included" }),
            &token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["quote"], "$450/night, breakfast included");
    assert_eq!(body["declineReason"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_respond_twice_is_conflict() {
    let (app, pool) = setup_db_test_app().await;
    let (_, code) = seed_test_hotel(&pool, "pass-1234").await;
    let booking = create_booking(&app, &code, &unique_test_email()).await;
    let token = login(&app, &code, "pass-1234").await;
    let uri = format!(
        "/api/v1/admin/bookings/{}/respond",
        booking["id"].as_str().unwrap()
    );

    let first = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            &uri,
            json!({ "decision": "decline", "detail": "Fully booked that week" }),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let body = parse_response_body(first).await;
    assert_eq!(body["status"], "declined");
    assert_eq!(body["declineReason"], "Fully booked that week");

    // The second answer loses: the guarded update matches nothing
    let second = app
        .oneshot(json_request_with_auth(
            Method::POST,
            &uri,
            json!({ "decision": "confirm", "detail": "$450/night" }),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = parse_response_body(second).await;
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_respond_to_another_hotels_booking_is_forbidden() {
    let (app, pool) = setup_db_test_app().await;
    let (_, owner_code) = seed_test_hotel(&pool, "pass-1234").await;
    let (_, other_code) = seed_test_hotel(&pool, "pass-5678").await;
    let booking = create_booking(&app, &owner_code, &unique_test_email()).await;
    let other_token = login(&app, &other_code, "pass-5678").await;

    let response = app
        .oneshot(json_request_with_auth(
            Method::POST,
            &format!("/api/v1/admin/bookings/{}/respond", booking["id"].as_str().unwrap()),
            json!({ "decision": "confirm", "detail": "$450/night" }),
            &other_token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_dashboard_lists_own_bookings_with_stats() {
    let (app, pool) = setup_db_test_app().await;
    let (_, code) = seed_test_hotel(&pool, "pass-1234").await;
    let (_, other_code) = seed_test_hotel(&pool, "pass-5678").await;

    let answered = create_booking(&app, &code, &unique_test_email()).await;
    create_booking(&app, &code, &unique_test_email()).await;
    // Another hotel's booking must never show up
    create_booking(&app, &other_code, &unique_test_email()).await;

    let token = login(&app, &code, "pass-1234").await;
    let respond = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            &format!("/api/v1/admin/bookings/{}/respond", answered["id"].as_str().unwrap()),
            json!({ "decision": "confirm", "detail": "$450/night" }),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(respond.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_request_with_auth("/api/v1/admin/bookings", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["stats"]["pending"], 1);
    assert_eq!(body["stats"]["confirmed"], 1);
    assert_eq!(body["stats"]["declined"], 0);
    assert_eq!(body["stats"]["requestsPerCountry"]["United Kingdom"], 2);

    // Stats stay computed over the full set while a filter is applied
    let response = app
        .oneshot(get_request_with_auth(
            "/api/v1/admin/bookings?status=pending",
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["status"], "pending");
    assert_eq!(body["stats"]["confirmed"], 1);
}
