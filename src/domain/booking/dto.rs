use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::booking_request::{self, BookingStatus};
use crate::domain::room::entity::room::Building;

/// 예약 요청 생성 바디
///
/// 신청자 정보(name/email/studentId/department)는 바디가 아니라
/// 인증 토큰에서 캡처합니다.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, message = "Building is required"))]
    #[schema(example = "A Block")]
    pub building: String,

    #[validate(length(min = 1, message = "Room is required"))]
    #[schema(example = "401")]
    pub room: String,

    /// 예약 날짜 (YYYY-MM-DD)
    #[validate(length(min = 1, message = "Date is required"))]
    #[schema(example = "2025-10-01")]
    pub date: String,

    /// "HH:MM-HH:MM" 구간 (기본 슬롯 또는 최대 2시간 연속 구간)
    #[validate(length(min = 1, message = "Time slot is required"))]
    #[schema(example = "09:00-10:00")]
    pub time_slot: String,

    #[validate(length(min = 1, message = "Purpose is required"))]
    #[schema(example = "Club meeting")]
    pub purpose: String,
}

/// 예약 심사 바디 (승인/거절)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBookingRequest {
    /// approved | rejected
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "approved")]
    pub status: String,

    #[validate(length(max = 1000, message = "Review notes cannot exceed 1000 characters"))]
    pub review_notes: Option<String>,
}

/// 예약 요청 레코드 응답
///
/// 필드 이름은 기존 클라이언트와의 계약이므로 원 API 표기(camelCase)를
/// 그대로 유지합니다.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: i64,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub building: Building,
    pub room: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub purpose: String,
    pub status: BookingStatus,
    pub request_date: NaiveDateTime,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub review_notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<booking_request::Model> for BookingResponse {
    fn from(model: booking_request::Model) -> Self {
        Self {
            booking_id: model.booking_id,
            name: model.name,
            email: model.email,
            student_id: model.student_id,
            department: model.department,
            building: model.building,
            room: model.room,
            date: model.date,
            time_slot: model.time_slot,
            purpose: model.purpose,
            status: model.status,
            request_date: model.request_date,
            reviewed_by: model.reviewed_by,
            reviewed_at: model.reviewed_at,
            review_notes: model.review_notes,
            created_at: model.created_at,
        }
    }
}

/// 가용성 조회 쿼리 파라미터
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// 조회 날짜 (YYYY-MM-DD)
    pub date: String,
}

/// 가용성 조회 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub building: String,
    pub room: String,
    pub date: String,
    /// 비어 있는 기본 슬롯 ("HH:MM-HH:MM")
    pub available_slots: Vec<String>,
    /// 점유 중인 구간 (승인 대상 예약이 제출한 원본 인코딩)
    pub booked_slots: Vec<String>,
}

/// 예약 목록 조회 쿼리 파라미터
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BookingListQuery {
    /// pending | approved | rejected
    pub status: Option<String>,
    pub building: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// 페이지네이션 정보
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current: u64,
    pub pages: u64,
    pub total: u64,
}

/// 예약 목록 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub bookings: Vec<BookingResponse>,
    pub pagination: Pagination,
}

/// 예약 생성 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBookingResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: BookingResponse,
}

/// 가용성 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessAvailabilityResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: AvailabilityResponse,
}

/// 예약 목록 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBookingListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: BookingListResponse,
}
