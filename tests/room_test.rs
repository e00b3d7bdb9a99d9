//! 방 카탈로그 테스트
//!
//! 테스트 대상:
//! - CreateRoomRequest / UpdateRoomRequest 유효성 검증
//! - 편의시설 태그 허용 목록 검증
//! - RoomResponse 직렬화

use campus_server::domain::room::dto::{CreateRoomRequest, RoomResponse, UpdateRoomRequest};
use campus_server::domain::room::entity::room::{self, Building};
use campus_server::domain::room::service::validate_amenities;
use campus_server::utils::error::AppError;
use chrono::NaiveDate;
use validator::Validate;

// ============== 유효성 검증 테스트 ==============

#[test]
fn should_validate_create_room_request_success() {
    // Arrange
    let req = CreateRoomRequest {
        building: "A Block".to_string(),
        room_number: "401".to_string(),
        capacity: 120,
        amenities: vec!["Projector".to_string(), "WiFi".to_string()],
        location: "Academic Building A".to_string(),
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

#[test]
fn should_fail_validation_when_room_number_is_empty() {
    let req = CreateRoomRequest {
        building: "A Block".to_string(),
        room_number: "".to_string(),
        capacity: 120,
        amenities: vec![],
        location: "Academic Building A".to_string(),
    };

    let result = req.validate();

    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("room_number"));
}

#[test]
fn should_fail_validation_when_capacity_is_not_positive() {
    let req = CreateRoomRequest {
        building: "A Block".to_string(),
        room_number: "401".to_string(),
        capacity: 0,
        amenities: vec![],
        location: "Academic Building A".to_string(),
    };

    let result = req.validate();

    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("capacity"));
}

#[test]
fn should_allow_partial_update_request() {
    let req = UpdateRoomRequest {
        capacity: None,
        amenities: None,
        location: None,
        is_active: Some(false),
    };

    assert!(req.validate().is_ok());
}

#[test]
fn should_accept_all_known_amenities() {
    let amenities: Vec<String> = room::AMENITIES.iter().map(|s| s.to_string()).collect();

    assert!(validate_amenities(&amenities).is_ok());
}

#[test]
fn should_reject_unknown_amenity_tag() {
    let amenities = vec!["Projector".to_string(), "Pool Table".to_string()];

    let result = validate_amenities(&amenities);

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

// ============== 직렬화 테스트 ==============

#[test]
fn should_serialize_room_response_in_camel_case() {
    // Arrange
    let now = NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let model = room::Model {
        room_id: 7,
        building: Building::MainAuditorium,
        room_number: "Auditorium".to_string(),
        capacity: 350,
        amenities: serde_json::json!(["Projector", "Sound System"]),
        is_active: true,
        location: "Central Campus - Main Auditorium".to_string(),
        created_at: now,
        updated_at: now,
    };

    // Act
    let json = serde_json::to_string(&RoomResponse::from(model)).unwrap();

    // Assert
    assert!(json.contains("\"roomNumber\":\"Auditorium\""));
    assert!(json.contains("\"building\":\"Main Auditorium\""));
    assert!(json.contains("\"isActive\":true"));
    assert!(json.contains("Sound System"));
    assert!(!json.contains("room_number"));
}

#[test]
fn should_convert_amenities_json_into_string_list() {
    let now = NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let model = room::Model {
        room_id: 1,
        building: Building::ABlock,
        room_number: "401".to_string(),
        capacity: 120,
        amenities: serde_json::json!(["Projector", "WiFi", "Whiteboard", "AC"]),
        is_active: true,
        location: "Academic Building A".to_string(),
        created_at: now,
        updated_at: now,
    };

    let response = RoomResponse::from(model);

    assert_eq!(
        response.amenities,
        vec!["Projector", "WiFi", "Whiteboard", "AC"]
    );
}
