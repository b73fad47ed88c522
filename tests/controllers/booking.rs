use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    middleware,
    routing::get,
};
use http_body_util::BodyExt;
use starport_bookings::{controllers, middlewares::jwt_auth_middleware, model::BookingData};
use tower::ServiceExt;

use crate::{
    AppStateTest, FailingBookingRepository, booking_record, generate_app_state,
    generate_response_custom_app_state,
};

#[tokio::test]
async fn show_should_be_ok_when_booking_belongs_to_user() {
    let test_state = AppStateTest::new(vec![booking_record("bk_1", "user_1")]);

    let request = test_state.authorized_request("/bookings/bk_1", "user_1");
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&response_body).unwrap();

    assert_eq!(
        body,
        serde_json::json!({
            "booking": {
                "id": "bk_1",
                "shipId": "ship_9",
                "totalPrice": 120.00,
                "startDate": "2024-01-01",
                "endDate": "2024-01-03",
            }
        })
    );
    assert_eq!(test_state.bookings.lookups(), 1);
}

#[tokio::test]
async fn show_should_not_expose_renter() {
    let test_state = AppStateTest::new(vec![booking_record("bk_1", "user_1")]);

    let request = test_state.authorized_request("/bookings/bk_1", "user_1");
    let response = test_state.generate_response(request).await;

    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(response_body.to_vec()).unwrap();
    assert!(!body.contains("renterId"));
    assert!(!body.contains("user_1"));

    let data: BookingData = serde_json::from_str(&body).unwrap();
    assert_eq!(data.booking.id, "bk_1");
}

#[tokio::test]
async fn show_should_be_not_found_when_booking_belongs_to_other_user() {
    let test_state = AppStateTest::new(vec![booking_record("bk_1", "user_1")]);

    let request = test_state.authorized_request("/bookings/bk_1", "user_2");
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&response_body[..], b"not found");
}

#[tokio::test]
async fn show_should_be_not_found_when_booking_is_missing() {
    let test_state = AppStateTest::new(vec![booking_record("bk_1", "user_1")]);

    let request = test_state.authorized_request("/bookings/bk_missing", "user_1");
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&response_body[..], b"not found");
}

#[tokio::test]
async fn show_should_be_bad_request_when_booking_id_is_too_long() {
    let test_state = AppStateTest::new(Vec::new());

    let uri = format!("/bookings/{}", "x".repeat(129));
    let request = test_state.authorized_request(&uri, "user_1");
    let response = test_state.generate_response(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test_state.bookings.lookups(), 0);
}

#[tokio::test]
async fn show_should_not_query_when_route_lacks_booking_id() {
    let test_state = AppStateTest::new(vec![booking_record("bk_1", "user_1")]);
    let state = Arc::new(test_state.app_state.clone());

    let router = Router::new()
        .route("/bookings", get(controllers::booking::show))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ))
        .with_state(state);

    let request = test_state.authorized_request("/bookings", "user_1");
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(test_state.bookings.lookups(), 0);
}

#[tokio::test]
async fn page_should_render_booking_as_html() {
    let test_state = AppStateTest::new(vec![booking_record("bk_1", "user_1")]);

    let request = test_state.authorized_request("/bookings/bk_1/page", "user_1");
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(response_body.to_vec()).unwrap();
    assert!(html.contains("<h2>Booking</h2>"));
    assert!(html.contains("&quot;id&quot;: &quot;bk_1&quot;"));
    assert!(!html.contains("renterId"));
}

#[tokio::test]
async fn page_should_render_not_found_with_requested_id() {
    let test_state = AppStateTest::new(vec![booking_record("bk_1", "user_1")]);

    let request = test_state.authorized_request("/bookings/bk_1/page", "user_2");
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(response_body.to_vec()).unwrap();
    assert_eq!(html.trim(), r#"<div>Booking "bk_1" not found</div>"#);
}

#[tokio::test]
async fn page_should_be_internal_error_when_lookup_fails() {
    let test_state = AppStateTest::new(Vec::new());
    let app_state = generate_app_state(Arc::new(FailingBookingRepository));

    let request = test_state.authorized_request("/bookings/bk_1/page", "user_1");
    let response = generate_response_custom_app_state(app_state, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(response_body.to_vec()).unwrap();
    assert!(!body.contains("not found"));
}

#[tokio::test]
async fn show_should_be_internal_error_when_lookup_fails() {
    let test_state = AppStateTest::new(Vec::new());
    let app_state = generate_app_state(Arc::new(FailingBookingRepository));

    let request = test_state.authorized_request("/bookings/bk_1", "user_1");
    let response = generate_response_custom_app_state(app_state, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    assert_ne!(&response_body[..], b"not found");
}

#[tokio::test]
async fn unauthenticated_request_to_route_lacking_booking_id_is_unauthorized() {
    let test_state = AppStateTest::new(vec![booking_record("bk_1", "user_1")]);
    let state = Arc::new(test_state.app_state.clone());

    let router = Router::new()
        .route("/bookings", get(controllers::booking::show))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ))
        .with_state(state);

    let request = Request::builder()
        .uri("/bookings")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(test_state.bookings.lookups(), 0);
}
