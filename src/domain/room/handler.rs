use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateRoomRequest, RoomListQuery, RoomResponse, UpdateRoomRequest};
use super::service::RoomService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 방 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    params(RoomListQuery),
    responses(
        (status = 200, description = "목록 조회 성공", body = SuccessRoomListResponse)
    ),
    tag = "Room"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomListQuery>,
) -> Result<Json<BaseResponse<Vec<RoomResponse>>>, AppError> {
    let rooms = RoomService::list(&state, query).await?;

    Ok(Json(BaseResponse::success(rooms)))
}

/// 건물별 방 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/rooms/building/{building}",
    params(("building" = String, Path, description = "건물 이름")),
    responses(
        (status = 200, description = "목록 조회 성공", body = SuccessRoomListResponse),
        (status = 400, description = "잘못된 건물", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn list_rooms_by_building(
    State(state): State<AppState>,
    Path(building): Path<String>,
) -> Result<Json<BaseResponse<Vec<RoomResponse>>>, AppError> {
    let rooms = RoomService::list_by_building(&state, &building).await?;

    Ok(Json(BaseResponse::success(rooms)))
}

/// 방 단건 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    params(("id" = i64, Path, description = "방 ID")),
    responses(
        (status = 200, description = "조회 성공", body = SuccessRoomResponse),
        (status = 404, description = "존재하지 않는 방", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<RoomResponse>>, AppError> {
    let room = RoomService::get(&state, id).await?;

    Ok(Json(BaseResponse::success(room)))
}

/// 방 등록 API (관리자 전용)
#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    security(("bearer_auth" = [])),
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "등록 성공", body = SuccessRoomResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 409, description = "이미 존재하는 방", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn create_room(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<BaseResponse<RoomResponse>>), AppError> {
    let room = RoomService::create(&state, &user.0, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success_with_message(
            "Room created successfully",
            room,
        )),
    ))
}

/// 방 수정 API (관리자 전용)
#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "방 ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "수정 성공", body = SuccessRoomResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 방", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn update_room(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<BaseResponse<RoomResponse>>, AppError> {
    let room = RoomService::update(&state, &user.0, id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        "Room updated successfully",
        room,
    )))
}

/// 방 삭제 API (관리자 전용)
#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "방 ID")),
    responses(
        (status = 200, description = "삭제 성공"),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 방", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    RoomService::remove(&state, &user.0, id).await?;

    Ok(Json(BaseResponse::message_only("Room deleted successfully")))
}
