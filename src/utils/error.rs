use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
///
/// 예약 코어의 에러 분류(검증/404/충돌/권한/상태 위반)를 HTTP 경계에서
/// 상태 코드와 응답 코드로 매핑합니다.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ValidationError(String),
    JsonParseFailed(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    RoomNotFound(String),
    BookingNotFound(String),
    UserNotFound(String),
    /// (building, roomNumber) 중복
    RoomDuplicate(String),
    /// 같은 방/날짜의 승인 대상 예약과 시간대가 겹침
    SlotConflict(String),
    /// 이미 승인/거절된 예약을 다시 심사하려는 경우
    BookingAlreadyReviewed(String),
    InternalError(String),
}

impl AppError {
    /// 에러 메시지 반환
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::JsonParseFailed(msg) => format!("Invalid request body: {}", msg),
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::Forbidden(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::RoomNotFound(msg) => msg.clone(),
            AppError::BookingNotFound(msg) => msg.clone(),
            AppError::UserNotFound(msg) => msg.clone(),
            AppError::RoomDuplicate(msg) => msg.clone(),
            AppError::SlotConflict(msg) => msg.clone(),
            AppError::BookingAlreadyReviewed(msg) => msg.clone(),
            AppError::InternalError(msg) => msg.clone(),
        }
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> String {
        match self {
            AppError::BadRequest(_) => "COMMON400",
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::Unauthorized(_) => "COMMON401",
            AppError::Forbidden(_) => "COMMON403",
            AppError::NotFound(_) => "COMMON404",
            AppError::RoomNotFound(_) => "ROOM404",
            AppError::BookingNotFound(_) => "BOOKING404",
            AppError::UserNotFound(_) => "USER404",
            AppError::RoomDuplicate(_) => "ROOM409",
            AppError::SlotConflict(_) => "BOOKING409",
            AppError::BookingAlreadyReviewed(_) => "BOOKING422",
            AppError::InternalError(_) => "COMMON500",
        }
        .to_string()
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RoomNotFound(_) => StatusCode::NOT_FOUND,
            AppError::BookingNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::RoomDuplicate(_) => StatusCode::CONFLICT,
            AppError::SlotConflict(_) => StatusCode::CONFLICT,
            AppError::BookingAlreadyReviewed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        // 에러 로깅
        match &self {
            AppError::InternalError(_) => {
                error!("Internal Server Error: {}", message);
            }
            _ => {
                error!("Error [{}]: {}", error_code, message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.to_string())
    }
}

/// 편의 함수들
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        AppError::Forbidden(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        AppError::InternalError(msg.into())
    }

    pub fn validation_error(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }
}
