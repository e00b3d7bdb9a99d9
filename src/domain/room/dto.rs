use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::room::{self, Building};

/// 방 등록 바디 (관리자 전용)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, message = "Building is required"))]
    #[schema(example = "A Block")]
    pub building: String,

    #[validate(length(min = 1, message = "Room number is required"))]
    #[schema(example = "401")]
    pub room_number: String,

    #[validate(range(min = 1, message = "Capacity must be a positive number"))]
    #[schema(example = 120)]
    pub capacity: i32,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[validate(length(min = 1, message = "Location is required"))]
    #[schema(example = "Academic Building A")]
    pub location: String,
}

/// 방 수정 바디 (관리자 전용)
///
/// (building, roomNumber)는 방의 정체성이므로 수정할 수 없습니다.
/// 비활성화(소프트 삭제)는 isActive = false로 처리합니다.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[validate(range(min = 1, message = "Capacity must be a positive number"))]
    pub capacity: Option<i32>,

    pub amenities: Option<Vec<String>>,

    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: Option<String>,

    pub is_active: Option<bool>,
}

/// 방 레코드 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: i64,
    pub building: Building,
    pub room_number: String,
    pub capacity: i32,
    pub amenities: Vec<String>,
    pub is_active: bool,
    pub location: String,
    pub created_at: NaiveDateTime,
}

impl From<room::Model> for RoomResponse {
    fn from(model: room::Model) -> Self {
        Self {
            room_id: model.room_id,
            building: model.building,
            room_number: model.room_number,
            capacity: model.capacity,
            amenities: serde_json::from_value(model.amenities).unwrap_or_default(),
            is_active: model.is_active,
            location: model.location,
            created_at: model.created_at,
        }
    }
}

/// 방 목록 조회 쿼리 파라미터
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RoomListQuery {
    pub building: Option<String>,
}

/// 방 단건 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRoomResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: RoomResponse,
}

/// 방 목록 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRoomListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<RoomResponse>,
}
