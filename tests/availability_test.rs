//! 가용성 조회 테스트
//!
//! 테스트 대상:
//! - GET /api/v1/bookings/availability/{building}/{room} 계산 로직
//! - 승인 대상(pending/approved) 예약만 슬롯을 점유한다는 불변식
//! - AvailabilityResponse 직렬화

use campus_server::domain::booking::dto::AvailabilityResponse;
use campus_server::domain::booking::entity::booking_request::BookingStatus;
use campus_server::domain::booking::schedule::{base_slots, free_slots, Interval};
use campus_server::domain::booking::service::booked_intervals;

/// 상태별 timeSlot 목록에서 승인 대상 예약의 구간만 골라낸다.
/// (서비스에서는 동일한 필터가 SQL로 내려간다)
fn admitted_slots(bookings: &[(BookingStatus, &str)]) -> Vec<String> {
    bookings
        .iter()
        .filter(|(status, _)| {
            matches!(status, BookingStatus::Pending | BookingStatus::Approved)
        })
        .map(|(_, slot)| slot.to_string())
        .collect()
}

#[test]
fn should_report_full_grid_for_room_without_bookings() {
    // given
    let occupied = booked_intervals(&[]).unwrap();

    // when
    let free = free_slots(&occupied);

    // then
    assert_eq!(free.len(), 25);
    assert_eq!(free, base_slots());
}

// Scenario D: 승인된 예약은 해당 슬롯을 점유한 것으로 보고된다
#[test]
fn should_mark_approved_booking_as_occupied() {
    // given
    let bookings = [(BookingStatus::Approved, "09:00-10:00")];
    let occupied = booked_intervals(&admitted_slots(&bookings)).unwrap();

    // when
    let free = free_slots(&occupied);

    // then
    let taken: Interval = "09:00-10:00".parse().unwrap();
    assert!(free.iter().all(|slot| !slot.overlaps(&taken)));
    assert_eq!(free.len(), 23);
}

#[test]
fn should_mark_pending_booking_as_occupied() {
    let bookings = [(BookingStatus::Pending, "14:00-15:00")];
    let occupied = booked_intervals(&admitted_slots(&bookings)).unwrap();

    let free = free_slots(&occupied);

    assert_eq!(free.len(), 23);
}

// Scenario E: 거절된 예약은 슬롯을 잡지 않는다
#[test]
fn should_free_slot_when_booking_is_rejected() {
    // given
    let bookings = [(BookingStatus::Rejected, "09:00-10:00")];
    let occupied = booked_intervals(&admitted_slots(&bookings)).unwrap();

    // when
    let free = free_slots(&occupied);

    // then
    assert_eq!(free.len(), 25);
}

#[test]
fn should_treat_compound_span_as_fully_occupied() {
    let bookings = [(BookingStatus::Approved, "17:00-19:30")];
    let occupied = booked_intervals(&admitted_slots(&bookings)).unwrap();

    let free = free_slots(&occupied);

    // 17:00-19:30은 기본 슬롯 5개를 덮는다
    assert_eq!(free.len(), 20);
    assert!(free.iter().map(ToString::to_string).all(|s| s != "18:00-18:30"));
}

// 가용성 조회는 읽기 전용이라 같은 입력에는 항상 같은 결과가 나온다
#[test]
fn should_compute_identical_availability_for_identical_input() {
    let bookings = [
        (BookingStatus::Approved, "09:00-10:00"),
        (BookingStatus::Pending, "11:00-12:30"),
        (BookingStatus::Rejected, "15:00-16:00"),
    ];

    let first = free_slots(&booked_intervals(&admitted_slots(&bookings)).unwrap());
    let second = free_slots(&booked_intervals(&admitted_slots(&bookings)).unwrap());

    assert_eq!(first, second);
}

// 점유로 보고되는 구간 집합과 빈 슬롯 집합은 겹치지 않아야 한다
// (가용성 엔진과 예약 쓰기가 같은 겹침 판정을 공유한다는 불변식)
#[test]
fn should_never_report_a_slot_as_both_free_and_booked() {
    let bookings = [
        (BookingStatus::Approved, "09:00-10:00"),
        (BookingStatus::Pending, "17:00-19:00"),
    ];
    let occupied = booked_intervals(&admitted_slots(&bookings)).unwrap();

    let free = free_slots(&occupied);

    for slot in &free {
        for taken in &occupied {
            assert!(!slot.overlaps(taken));
        }
    }
}

// ============== 직렬화 테스트 ==============

#[test]
fn should_serialize_availability_response_in_camel_case() {
    // Arrange
    let response = AvailabilityResponse {
        building: "A Block".to_string(),
        room: "401".to_string(),
        date: "2025-10-01".to_string(),
        available_slots: vec!["08:30-09:00".to_string()],
        booked_slots: vec!["09:00-10:00".to_string()],
    };

    // Act
    let json = serde_json::to_string(&response).unwrap();

    // Assert
    assert!(json.contains("availableSlots"));
    assert!(json.contains("bookedSlots"));
    assert!(!json.contains("available_slots"));
}
