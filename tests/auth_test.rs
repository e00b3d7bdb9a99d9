//! 인증/권한 통합 테스트
//!
//! DB 연결 없이 라우터를 oneshot으로 호출해 토큰 검증과 역할 게이트가
//! DB 접근 전에 동작하는지 확인합니다.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use campus_server::config::AppConfig;
use campus_server::state::AppState;
use campus_server::utils::jwt::{decode_token, encode_token, Claims};
use http_body_util::BodyExt;
use tower::ServiceExt;

const TEST_SECRET: &str = "test-secret";

fn test_state() -> AppState {
    AppState {
        db: sea_orm::DatabaseConnection::default(),
        config: AppConfig {
            server_port: 8080,
            database_url: "mysql://unused".to_string(),
            jwt_secret: TEST_SECRET.to_string(),
            jwt_expiration: 3600,
        },
    }
}

fn claims(role: &str) -> Claims {
    Claims {
        sub: "1".to_string(),
        name: "Test User".to_string(),
        email: "test@campus.edu".to_string(),
        student_id: "S2023001".to_string(),
        department: "Computer Science".to_string(),
        role: role.to_string(),
        iat: 0,
        exp: 0,
    }
}

fn bearer(role: &str) -> String {
    let token = encode_token(claims(role), TEST_SECRET, 3600).unwrap();
    format!("Bearer {}", token)
}

// ============== JWT 테스트 ==============

#[test]
fn should_roundtrip_claims_through_encode_and_decode() {
    // given
    let token = encode_token(claims("student"), TEST_SECRET, 3600).unwrap();

    // when
    let decoded = decode_token(&token, TEST_SECRET).unwrap();

    // then
    assert_eq!(decoded.sub, "1");
    assert_eq!(decoded.email, "test@campus.edu");
    assert_eq!(decoded.student_id, "S2023001");
    assert_eq!(decoded.role, "student");
}

#[test]
fn should_reject_token_signed_with_different_secret() {
    let token = encode_token(claims("student"), "other-secret", 3600).unwrap();

    let result = decode_token(&token, TEST_SECRET);

    assert!(result.is_err());
}

#[test]
fn should_reject_expired_token() {
    let token = encode_token(claims("student"), TEST_SECRET, -3600).unwrap();

    let result = decode_token(&token, TEST_SECRET);

    assert!(result.is_err());
}

// ============== 라우터 테스트 ==============

#[tokio::test]
async fn should_return_ok_on_health_check() {
    let app = campus_server::app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_return_401_without_token() {
    let app = campus_server::app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/bookings/my-bookings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["code"], "COMMON401");
}

#[tokio::test]
async fn should_return_401_with_malformed_token() {
    let app = campus_server::app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/bookings/my-bookings")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// Scenario F: 학생 토큰으로는 심사 요청이 403으로 거부된다
#[tokio::test]
async fn should_return_403_when_student_reviews_booking() {
    let app = campus_server::app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/v1/bookings/1/status")
                .header(header::AUTHORIZATION, bearer("student"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"status":"approved"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "COMMON403");
}

#[tokio::test]
async fn should_return_403_when_faculty_lists_users() {
    let app = campus_server::app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/users")
                .header(header::AUTHORIZATION, bearer("faculty"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn should_return_400_for_unknown_building_before_touching_db() {
    let app = campus_server::app(test_state());

    let body = serde_json::json!({
        "building": "Z Block",
        "room": "401",
        "date": "2099-01-01",
        "timeSlot": "09:00-10:00",
        "purpose": "Club meeting"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/bookings")
                .header(header::AUTHORIZATION, bearer("student"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "COMMON400");
}
