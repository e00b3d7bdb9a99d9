use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    AvailabilityQuery, AvailabilityResponse, BookingListQuery, BookingListResponse,
    BookingResponse, CreateBookingRequest, ReviewBookingRequest,
};
use super::service::BookingService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 예약 요청 생성 API
///
/// 신청자 정보는 토큰에서 캡처하며, 같은 방/날짜에서 구간이 겹치면
/// 409(BOOKING409)를 반환합니다.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "예약 요청 생성 성공", body = SuccessBookingResponse),
        (status = 400, description = "잘못된 입력", body = ErrorResponse),
        (status = 404, description = "존재하지 않거나 비활성화된 방", body = ErrorResponse),
        (status = 409, description = "이미 예약된 시간대", body = ErrorResponse)
    ),
    tag = "Booking"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BaseResponse<BookingResponse>>), AppError> {
    let booking = BookingService::submit(&state, &user.0, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success_with_message(
            "Booking request created successfully",
            booking,
        )),
    ))
}

/// 방/날짜별 가용성 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/bookings/availability/{building}/{room}",
    security(("bearer_auth" = [])),
    params(
        ("building" = String, Path, description = "건물 이름"),
        ("room" = String, Path, description = "방 번호"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "가용성 조회 성공", body = SuccessAvailabilityResponse),
        (status = 400, description = "잘못된 날짜/건물", body = ErrorResponse),
        (status = 404, description = "존재하지 않거나 비활성화된 방", body = ErrorResponse)
    ),
    tag = "Booking"
)]
pub async fn get_availability(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((building, room)): Path<(String, String)>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<BaseResponse<AvailabilityResponse>>, AppError> {
    let availability =
        BookingService::get_availability(&state, &building, &room, &query.date).await?;

    Ok(Json(BaseResponse::success(availability)))
}

/// 내 예약 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/bookings/my-bookings",
    security(("bearer_auth" = [])),
    params(BookingListQuery),
    responses(
        (status = 200, description = "목록 조회 성공", body = SuccessBookingListResponse)
    ),
    tag = "Booking"
)]
pub async fn list_my_bookings(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<BaseResponse<BookingListResponse>>, AppError> {
    let list = BookingService::list_mine(&state, &user.0, query).await?;

    Ok(Json(BaseResponse::success(list)))
}

/// 전체 예약 목록 조회 API (admin/faculty 전용)
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    security(("bearer_auth" = [])),
    params(BookingListQuery),
    responses(
        (status = 200, description = "목록 조회 성공", body = SuccessBookingListResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "Booking"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<BaseResponse<BookingListResponse>>, AppError> {
    let list = BookingService::list_all(&state, &user.0, query).await?;

    Ok(Json(BaseResponse::success(list)))
}

/// 예약 단건 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "예약 요청 ID")),
    responses(
        (status = 200, description = "조회 성공", body = SuccessBookingResponse),
        (status = 404, description = "존재하지 않는 예약", body = ErrorResponse)
    ),
    tag = "Booking"
)]
pub async fn get_booking(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<BookingResponse>>, AppError> {
    let booking = BookingService::get_by_id(&state, id).await?;

    Ok(Json(BaseResponse::success(booking)))
}

/// 예약 심사 API (승인/거절, admin/faculty 전용)
///
/// 이미 결정된 요청을 다시 심사하면 422(BOOKING422)를 반환합니다.
#[utoipa::path(
    patch,
    path = "/api/v1/bookings/{id}/status",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "예약 요청 ID")),
    request_body = ReviewBookingRequest,
    responses(
        (status = 200, description = "심사 성공", body = SuccessBookingResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 예약", body = ErrorResponse),
        (status = 422, description = "이미 심사된 예약", body = ErrorResponse)
    ),
    tag = "Booking"
)]
pub async fn review_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<ReviewBookingRequest>,
) -> Result<Json<BaseResponse<BookingResponse>>, AppError> {
    let booking = BookingService::review(&state, &user.0, id, req).await?;

    let message = format!("Booking request {} successfully", booking.status.label());
    Ok(Json(BaseResponse::success_with_message(message, booking)))
}

/// 예약 삭제 API (본인 또는 관리자)
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "예약 요청 ID")),
    responses(
        (status = 200, description = "삭제 성공"),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 예약", body = ErrorResponse)
    ),
    tag = "Booking"
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    BookingService::remove(&state, &user.0, id).await?;

    Ok(Json(BaseResponse::message_only(
        "Booking request deleted successfully",
    )))
}
