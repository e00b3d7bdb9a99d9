use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use tracing::info;
use validator::Validate;

use crate::domain::room::entity::room::{self, Building};
use crate::state::AppState;
use crate::utils::auth::{ensure_owner_or_admin, ensure_reviewer};
use crate::utils::error::AppError;
use crate::utils::jwt::Claims;

use super::dto::{
    AvailabilityResponse, BookingListQuery, BookingListResponse, BookingResponse,
    CreateBookingRequest, Pagination, ReviewBookingRequest,
};
use super::entity::booking_request::{self, BookingStatus};
use super::entity::slot_claim;
use super::schedule::{self, Interval};

pub struct BookingService;

impl BookingService {
    /// 예약 요청 제출
    ///
    /// 같은 방/날짜의 승인 대상(pending/approved) 예약과 구간이 겹치면
    /// 거부합니다. 트랜잭션 안의 겹침 조회는 빠른 에러 경로이고, 동시 제출의
    /// 최종 방어선은 slot_claim의 (building, room, date, slot_start) 유니크
    /// 인덱스입니다. 경합에서 진 쪽은 중복 키 위반으로 같은 충돌 에러를
    /// 받습니다.
    pub async fn submit(
        state: &AppState,
        claims: &Claims,
        req: CreateBookingRequest,
    ) -> Result<BookingResponse, AppError> {
        // 1. 입력 검증
        req.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        let building = parse_building(&req.building)?;
        let date = parse_date(&req.date)?;
        ensure_bookable_date(date, Utc::now().date_naive())?;
        let interval = parse_requested_interval(&req.time_slot)?;

        // 2. 방 존재/활성 확인
        find_active_room(state, building, &req.room).await?;

        // 3. 트랜잭션 시작
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 4. 겹침 사전 확인
        let admitted = booking_request::Entity::find()
            .filter(booking_request::Column::Building.eq(building))
            .filter(booking_request::Column::Room.eq(req.room.as_str()))
            .filter(booking_request::Column::Date.eq(date))
            .filter(
                booking_request::Column::Status
                    .is_in([BookingStatus::Pending, BookingStatus::Approved]),
            )
            .all(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let slot_strings: Vec<String> = admitted.iter().map(|b| b.time_slot.clone()).collect();
        let occupied = booked_intervals(&slot_strings)?;
        if occupied.iter().any(|o| o.overlaps(&interval)) {
            return Err(AppError::SlotConflict(
                "Room is already booked for this time slot".to_string(),
            ));
        }

        // 5. 예약 요청 생성 (신청자 정보는 토큰에서 캡처)
        let now = Utc::now().naive_utc();
        let inserted = booking_request::ActiveModel {
            name: Set(claims.name.clone()),
            email: Set(claims.email.clone()),
            student_id: Set(claims.student_id.clone()),
            department: Set(claims.department.clone()),
            building: Set(building),
            room: Set(req.room.clone()),
            date: Set(date),
            time_slot: Set(interval.to_string()),
            purpose: Set(req.purpose.clone()),
            status: Set(BookingStatus::Pending),
            request_date: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 6. 기본 슬롯 단위로 점유 행 기록
        for slot in schedule::base_slots_of(&interval) {
            slot_claim::ActiveModel {
                booking_id: Set(inserted.booking_id),
                building: Set(building),
                room: Set(req.room.clone()),
                date: Set(date),
                slot_start: Set(slot.start),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                // 유니크 인덱스 위반 시 409 Conflict로 매핑
                if is_unique_violation(&e) {
                    AppError::SlotConflict(
                        "Room is already booked for this time slot".to_string(),
                    )
                } else {
                    AppError::InternalError(e.to_string())
                }
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            booking_id = inserted.booking_id,
            building = building.label(),
            room = %req.room,
            date = %date,
            time_slot = %inserted.time_slot,
            "Booking request created"
        );

        Ok(inserted.into())
    }

    /// 방/날짜별 가용성 조회
    ///
    /// 읽기 전용입니다. 여기서 점유로 보고되는 구간 집합은 submit이 거부하는
    /// 집합과 동일한 기준(승인 대상 예약, 동일 겹침 판정)으로 계산됩니다.
    pub async fn get_availability(
        state: &AppState,
        building_raw: &str,
        room_raw: &str,
        date_raw: &str,
    ) -> Result<AvailabilityResponse, AppError> {
        let building = parse_building(building_raw)?;
        let date = parse_date(date_raw)?;

        find_active_room(state, building, room_raw).await?;

        let admitted = booking_request::Entity::find()
            .filter(booking_request::Column::Building.eq(building))
            .filter(booking_request::Column::Room.eq(room_raw))
            .filter(booking_request::Column::Date.eq(date))
            .filter(
                booking_request::Column::Status
                    .is_in([BookingStatus::Pending, BookingStatus::Approved]),
            )
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let booked_slots: Vec<String> = admitted.iter().map(|b| b.time_slot.clone()).collect();
        let occupied = booked_intervals(&booked_slots)?;
        let available_slots = schedule::free_slots(&occupied)
            .iter()
            .map(ToString::to_string)
            .collect();

        Ok(AvailabilityResponse {
            building: building.label().to_string(),
            room: room_raw.to_string(),
            date: date.to_string(),
            available_slots,
            booked_slots,
        })
    }

    /// 예약 심사 (승인/거절)
    ///
    /// pending 상태의 요청만 심사할 수 있고, 이미 결정된 요청은 422로
    /// 거부합니다. 거절 시 점유 행을 지워 슬롯을 즉시 반환합니다. 승인 시
    /// 겹침 재확인은 하지 않습니다. pending 예약은 제출 시점에 이미 슬롯을
    /// 점유했기 때문입니다.
    pub async fn review(
        state: &AppState,
        claims: &Claims,
        booking_id: i64,
        req: ReviewBookingRequest,
    ) -> Result<BookingResponse, AppError> {
        ensure_reviewer(claims)?;
        req.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        let decision = parse_decision(&req.status)?;

        let booking = booking_request::Entity::find_by_id(booking_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| {
                AppError::BookingNotFound("Booking request not found".to_string())
            })?;

        ensure_pending(booking.status)?;

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 거절된 예약은 슬롯을 잡지 않는다
        if decision == BookingStatus::Rejected {
            slot_claim::Entity::delete_many()
                .filter(slot_claim::Column::BookingId.eq(booking_id))
                .exec(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
        }

        let now = Utc::now().naive_utc();
        let mut active: booking_request::ActiveModel = booking.into();
        active.status = Set(decision);
        active.reviewed_by = Set(Some(claims.name.clone()));
        active.reviewed_at = Set(Some(now));
        active.review_notes = Set(req.review_notes.clone());
        active.updated_at = Set(now);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            booking_id = booking_id,
            decision = decision.label(),
            reviewer = %claims.name,
            "Booking request reviewed"
        );

        Ok(updated.into())
    }

    /// 예약 삭제
    ///
    /// 본인(이메일 기준) 또는 관리자만 가능하며, 상태와 무관하게 점유 행까지
    /// 함께 지웁니다.
    pub async fn remove(
        state: &AppState,
        claims: &Claims,
        booking_id: i64,
    ) -> Result<(), AppError> {
        let booking = booking_request::Entity::find_by_id(booking_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| {
                AppError::BookingNotFound("Booking request not found".to_string())
            })?;

        ensure_owner_or_admin(claims, &booking.email)?;

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        slot_claim::Entity::delete_many()
            .filter(slot_claim::Column::BookingId.eq(booking_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        booking_request::Entity::delete_by_id(booking_id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(booking_id = booking_id, "Booking request deleted");

        Ok(())
    }

    /// 내 예약 목록 조회
    pub async fn list_mine(
        state: &AppState,
        claims: &Claims,
        query: BookingListQuery,
    ) -> Result<BookingListResponse, AppError> {
        let mut select =
            booking_request::Entity::find().filter(booking_request::Column::Email.eq(claims.email.as_str()));

        if let Some(raw) = &query.status {
            select = select.filter(booking_request::Column::Status.eq(parse_status_filter(raw)?));
        }

        Self::paginate(state, select, &query).await
    }

    /// 전체 예약 목록 조회 (admin/faculty 전용)
    pub async fn list_all(
        state: &AppState,
        claims: &Claims,
        query: BookingListQuery,
    ) -> Result<BookingListResponse, AppError> {
        ensure_reviewer(claims)?;

        let mut select = booking_request::Entity::find();

        if let Some(raw) = &query.status {
            select = select.filter(booking_request::Column::Status.eq(parse_status_filter(raw)?));
        }
        if let Some(raw) = &query.building {
            select = select.filter(booking_request::Column::Building.eq(parse_building(raw)?));
        }

        Self::paginate(state, select, &query).await
    }

    /// 예약 단건 조회
    pub async fn get_by_id(state: &AppState, booking_id: i64) -> Result<BookingResponse, AppError> {
        booking_request::Entity::find_by_id(booking_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .map(BookingResponse::from)
            .ok_or_else(|| AppError::BookingNotFound("Booking request not found".to_string()))
    }

    async fn paginate(
        state: &AppState,
        select: sea_orm::Select<booking_request::Entity>,
        query: &BookingListQuery,
    ) -> Result<BookingListResponse, AppError> {
        let (page, limit) = page_params(query);

        let total = select
            .clone()
            .count(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let rows = select
            .order_by_desc(booking_request::Column::CreatedAt)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(BookingListResponse {
            bookings: rows.into_iter().map(BookingResponse::from).collect(),
            pagination: Pagination {
                current: page,
                pages: total.div_ceil(limit),
                total,
            },
        })
    }
}

/// 건물 이름 파싱
pub fn parse_building(raw: &str) -> Result<Building, AppError> {
    Building::from_label(raw)
        .ok_or_else(|| AppError::ValidationError(format!("Invalid building: {}", raw)))
}

/// 날짜 파싱 (YYYY-MM-DD)
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::ValidationError(format!("Invalid date: {}", raw)))
}

/// 제출 시점 규칙: 오늘 이후 날짜만 예약할 수 있습니다.
/// 가용성 조회에는 이 제한이 없습니다.
pub fn ensure_bookable_date(date: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
    if date < today {
        return Err(AppError::ValidationError(
            "Booking date cannot be in the past".to_string(),
        ));
    }
    Ok(())
}

/// 요청 구간 파싱 + 슬롯 경계/최대 길이 검사
pub fn parse_requested_interval(raw: &str) -> Result<Interval, AppError> {
    let interval: Interval = raw.parse()?;
    if !schedule::is_valid_span(&interval) {
        return Err(AppError::ValidationError(format!(
            "Invalid time slot: {}",
            raw
        )));
    }
    Ok(interval)
}

/// 목록 필터용 상태 파싱
pub fn parse_status_filter(raw: &str) -> Result<BookingStatus, AppError> {
    BookingStatus::from_label(raw)
        .ok_or_else(|| AppError::ValidationError(format!("Invalid status: {}", raw)))
}

/// 심사 결정 파싱: approved 또는 rejected만 허용
pub fn parse_decision(raw: &str) -> Result<BookingStatus, AppError> {
    match BookingStatus::from_label(raw) {
        Some(BookingStatus::Approved) => Ok(BookingStatus::Approved),
        Some(BookingStatus::Rejected) => Ok(BookingStatus::Rejected),
        _ => Err(AppError::ValidationError(
            "Status must be approved or rejected".to_string(),
        )),
    }
}

/// pending 상태 확인: 이미 결정된 요청의 재심사를 막습니다.
pub fn ensure_pending(status: BookingStatus) -> Result<(), AppError> {
    if status == BookingStatus::Pending {
        Ok(())
    } else {
        Err(AppError::BookingAlreadyReviewed(
            "Booking request has already been reviewed".to_string(),
        ))
    }
}

/// 저장된 timeSlot 문자열들을 구간으로 파싱
///
/// 저장 시점에 검증을 통과한 값이므로 파싱 실패는 데이터 손상입니다.
pub fn booked_intervals(slots: &[String]) -> Result<Vec<Interval>, AppError> {
    slots
        .iter()
        .map(|raw| {
            raw.parse::<Interval>().map_err(|_| {
                AppError::InternalError(format!("Corrupt time slot in store: {}", raw))
            })
        })
        .collect()
}

fn page_params(query: &BookingListQuery) -> (u64, u64) {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    (page, limit)
}

fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("duplicate") || msg.contains("unique") || msg.contains("constraint")
}

async fn find_active_room(
    state: &AppState,
    building: Building,
    room_number: &str,
) -> Result<room::Model, AppError> {
    room::Entity::find()
        .filter(room::Column::Building.eq(building))
        .filter(room::Column::RoomNumber.eq(room_number))
        .filter(room::Column::IsActive.eq(true))
        .one(&state.db)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .ok_or_else(|| AppError::RoomNotFound("Room not found".to_string()))
}
