use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;
use validator::Validate;

use crate::domain::booking::service::parse_building;
use crate::state::AppState;
use crate::utils::auth::ensure_admin;
use crate::utils::error::AppError;
use crate::utils::jwt::Claims;

use super::dto::{CreateRoomRequest, RoomListQuery, RoomResponse, UpdateRoomRequest};
use super::entity::room::{self, AMENITIES};

pub struct RoomService;

impl RoomService {
    /// 활성 방 목록 조회 (건물 필터 선택)
    pub async fn list(state: &AppState, query: RoomListQuery) -> Result<Vec<RoomResponse>, AppError> {
        let mut select = room::Entity::find().filter(room::Column::IsActive.eq(true));

        if let Some(raw) = &query.building {
            select = select.filter(room::Column::Building.eq(parse_building(raw)?));
        }

        let rooms = select
            .order_by_asc(room::Column::Building)
            .order_by_asc(room::Column::RoomNumber)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(rooms.into_iter().map(RoomResponse::from).collect())
    }

    /// 특정 건물의 활성 방 목록 조회
    pub async fn list_by_building(
        state: &AppState,
        building_raw: &str,
    ) -> Result<Vec<RoomResponse>, AppError> {
        let building = parse_building(building_raw)?;

        let rooms = room::Entity::find()
            .filter(room::Column::Building.eq(building))
            .filter(room::Column::IsActive.eq(true))
            .order_by_asc(room::Column::RoomNumber)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(rooms.into_iter().map(RoomResponse::from).collect())
    }

    /// 방 단건 조회
    pub async fn get(state: &AppState, room_id: i64) -> Result<RoomResponse, AppError> {
        room::Entity::find_by_id(room_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .map(RoomResponse::from)
            .ok_or_else(|| AppError::RoomNotFound("Room not found".to_string()))
    }

    /// 방 등록 (관리자 전용)
    ///
    /// (building, roomNumber)는 유니크 인덱스로 보장되며, 중복 등록은 409로
    /// 매핑됩니다.
    pub async fn create(
        state: &AppState,
        claims: &Claims,
        req: CreateRoomRequest,
    ) -> Result<RoomResponse, AppError> {
        ensure_admin(claims)?;
        req.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        let building = parse_building(&req.building)?;
        validate_amenities(&req.amenities)?;

        let now = Utc::now().naive_utc();
        let inserted = room::ActiveModel {
            building: Set(building),
            room_number: Set(req.room_number.clone()),
            capacity: Set(req.capacity),
            amenities: Set(serde_json::json!(req.amenities)),
            is_active: Set(true),
            location: Set(req.location.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|e| {
            // 유니크 인덱스 위반 시 409 Conflict로 매핑
            let msg = e.to_string().to_lowercase();
            if msg.contains("duplicate") || msg.contains("unique") || msg.contains("constraint") {
                AppError::RoomDuplicate("Room already exists in this building".to_string())
            } else {
                AppError::InternalError(e.to_string())
            }
        })?;

        info!(
            room_id = inserted.room_id,
            building = building.label(),
            room_number = %inserted.room_number,
            "Room created"
        );

        Ok(inserted.into())
    }

    /// 방 수정 (관리자 전용)
    pub async fn update(
        state: &AppState,
        claims: &Claims,
        room_id: i64,
        req: UpdateRoomRequest,
    ) -> Result<RoomResponse, AppError> {
        ensure_admin(claims)?;
        req.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let existing = room::Entity::find_by_id(room_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::RoomNotFound("Room not found".to_string()))?;

        let mut active: room::ActiveModel = existing.into();
        if let Some(capacity) = req.capacity {
            active.capacity = Set(capacity);
        }
        if let Some(amenities) = &req.amenities {
            validate_amenities(amenities)?;
            active.amenities = Set(serde_json::json!(amenities));
        }
        if let Some(location) = req.location {
            active.location = Set(location);
        }
        if let Some(is_active) = req.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(updated.into())
    }

    /// 방 삭제 (관리자 전용, 하드 삭제)
    pub async fn remove(state: &AppState, claims: &Claims, room_id: i64) -> Result<(), AppError> {
        ensure_admin(claims)?;

        let result = room::Entity::delete_by_id(room_id)
            .exec(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(AppError::RoomNotFound("Room not found".to_string()));
        }

        info!(room_id = room_id, "Room deleted");

        Ok(())
    }
}

/// 편의시설 태그 검증: 허용 목록 밖의 값은 거부
pub fn validate_amenities(amenities: &[String]) -> Result<(), AppError> {
    for tag in amenities {
        if !AMENITIES.contains(&tag.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Invalid amenity: {}",
                tag
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_known_amenities() {
        let amenities = vec!["Projector".to_string(), "WiFi".to_string()];

        assert!(validate_amenities(&amenities).is_ok());
    }

    #[test]
    fn should_accept_empty_amenity_list() {
        assert!(validate_amenities(&[]).is_ok());
    }

    #[test]
    fn should_reject_unknown_amenity() {
        let amenities = vec!["Jacuzzi".to_string()];

        let result = validate_amenities(&amenities);

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
