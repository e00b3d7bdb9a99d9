use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{UpdateRoleRequest, UserListQuery, UserListResponse, UserResponse};
use super::service::UserService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 사용자 목록 조회 API (관리자 전용)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    security(("bearer_auth" = [])),
    params(UserListQuery),
    responses(
        (status = 200, description = "목록 조회 성공", body = SuccessUserListResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<UserListQuery>,
) -> Result<Json<BaseResponse<UserListResponse>>, AppError> {
    let list = UserService::list(&state, &user.0, query).await?;

    Ok(Json(BaseResponse::success(list)))
}

/// 사용자 단건 조회 API (관리자 전용)
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "사용자 ID")),
    responses(
        (status = 200, description = "조회 성공", body = SuccessUserResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 사용자", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn get_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<UserResponse>>, AppError> {
    let profile = UserService::get(&state, &user.0, id).await?;

    Ok(Json(BaseResponse::success(profile)))
}

/// 역할 변경 API (관리자 전용)
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}/role",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "사용자 ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "역할 변경 성공", body = SuccessUserResponse),
        (status = 400, description = "잘못된 역할 또는 본인 역할 변경", body = ErrorResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 사용자", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<BaseResponse<UserResponse>>, AppError> {
    let profile = UserService::update_role(&state, &user.0, id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        "User role updated successfully",
        profile,
    )))
}
