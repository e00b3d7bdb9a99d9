//! 슬롯 그리드와 시간 구간 연산
//!
//! 하루의 예약 단위는 08:30~21:00 사이의 30분 기본 슬롯 25개이며,
//! 예약 구간은 기본 슬롯 1개 또는 최대 4개(2시간)의 연속 구간입니다.
//! 겹침 판정은 반개구간 `[start, end)` 기준으로 이 모듈의 `Interval::overlaps`
//! 하나만 사용합니다. 가용성 계산과 예약 쓰기가 서로 다른 기준을 쓰면
//! 이중 예약이 새기 때문입니다.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime};

use crate::utils::error::AppError;

/// 기본 슬롯 길이 (분)
pub const SLOT_MINUTES: i64 = 30;

/// 한 예약이 차지할 수 있는 최대 기본 슬롯 수 (2시간)
pub const MAX_SPAN_SLOTS: i64 = 4;

/// 운영 시작 시각 (08:30)
pub fn day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 30, 0).expect("valid time")
}

/// 운영 종료 시각 (21:00)
pub fn day_end() -> NaiveTime {
    NaiveTime::from_hms_opt(21, 0, 0).expect("valid time")
}

/// 반개구간 `[start, end)` 시간 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Interval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// 두 구간이 겹치는지 판정
    ///
    /// 반개구간이므로 끝점이 맞닿는 구간(10:00-11:00과 11:00-12:00)은
    /// 겹치지 않습니다.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl FromStr for Interval {
    type Err = AppError;

    /// "HH:MM-HH:MM" 형식 파싱
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start_raw, end_raw) = s
            .split_once('-')
            .ok_or_else(|| AppError::ValidationError(format!("Invalid time slot format: {}", s)))?;

        let start = NaiveTime::parse_from_str(start_raw.trim(), "%H:%M")
            .map_err(|_| AppError::ValidationError(format!("Invalid time slot format: {}", s)))?;
        let end = NaiveTime::parse_from_str(end_raw.trim(), "%H:%M")
            .map_err(|_| AppError::ValidationError(format!("Invalid time slot format: {}", s)))?;

        Ok(Interval { start, end })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// 하루의 기본 슬롯 목록
///
/// 호출 시마다 동일한 순서의 동일한 목록을 반환합니다.
pub fn base_slots() -> Vec<Interval> {
    let mut slots = Vec::with_capacity(25);
    let mut cursor = day_start();
    while cursor < day_end() {
        let next = cursor + Duration::minutes(SLOT_MINUTES);
        slots.push(Interval::new(cursor, next));
        cursor = next;
    }
    slots
}

/// 예약 구간 유효성 검사
///
/// 양 끝이 슬롯 경계에 정렬되고 운영 시간 내에 있으며,
/// start < end 이고 길이가 최대 구간(2시간)을 넘지 않아야 합니다.
pub fn is_valid_span(interval: &Interval) -> bool {
    if interval.start >= interval.end {
        return false;
    }
    if interval.start < day_start() || interval.end > day_end() {
        return false;
    }

    let aligned = |t: NaiveTime| {
        t.signed_duration_since(day_start()).num_minutes() % SLOT_MINUTES == 0
    };
    if !aligned(interval.start) || !aligned(interval.end) {
        return false;
    }

    let span_minutes = interval
        .end
        .signed_duration_since(interval.start)
        .num_minutes();
    span_minutes <= SLOT_MINUTES * MAX_SPAN_SLOTS
}

/// 복합 구간을 구성 기본 슬롯으로 분해
///
/// 유효한 구간이라면 정확히 그 구간을 덮는 기본 슬롯들이 나옵니다.
pub fn base_slots_of(interval: &Interval) -> Vec<Interval> {
    base_slots()
        .into_iter()
        .filter(|slot| slot.overlaps(interval))
        .collect()
}

/// 점유 구간 목록이 주어졌을 때 비어 있는 기본 슬롯 계산
pub fn free_slots(booked: &[Interval]) -> Vec<Interval> {
    base_slots()
        .into_iter()
        .filter(|slot| booked.iter().all(|b| !slot.overlaps(b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(s: &str) -> Interval {
        s.parse().expect("valid interval literal")
    }

    #[test]
    fn should_generate_25_base_slots_in_order() {
        let slots = base_slots();

        assert_eq!(slots.len(), 25);
        assert_eq!(slots.first().map(ToString::to_string).as_deref(), Some("08:30-09:00"));
        assert_eq!(slots.last().map(ToString::to_string).as_deref(), Some("20:30-21:00"));
        assert!(slots.windows(2).all(|w| w[0].end == w[1].start));
    }

    #[test]
    fn should_return_identical_grid_on_every_call() {
        assert_eq!(base_slots(), base_slots());
    }

    #[test]
    fn should_parse_and_display_slot_string_roundtrip() {
        let parsed = interval("09:00-10:00");

        assert_eq!(parsed.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(parsed.end, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(parsed.to_string(), "09:00-10:00");
    }

    #[test]
    fn should_reject_malformed_slot_strings() {
        for raw in ["", "09:00", "9am-10am", "09:00~10:00", "0900-1000"] {
            let result = raw.parse::<Interval>();
            assert!(
                matches!(result, Err(AppError::ValidationError(_))),
                "expected validation error for {:?}",
                raw
            );
        }
    }

    #[test]
    fn should_detect_overlap_symmetrically() {
        let a = interval("09:00-10:00");
        let b = interval("09:30-10:30");

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn should_not_overlap_when_endpoints_touch() {
        let a = interval("10:00-11:00");
        let b = interval("11:00-12:00");

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn should_overlap_when_one_contains_the_other() {
        let outer = interval("09:00-11:00");
        let inner = interval("09:30-10:00");

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn should_accept_single_base_slot_span() {
        assert!(is_valid_span(&interval("09:00-09:30")));
    }

    #[test]
    fn should_accept_compound_span_up_to_two_hours() {
        assert!(is_valid_span(&interval("17:00-19:00")));
        assert!(is_valid_span(&interval("08:30-10:30")));
    }

    #[test]
    fn should_reject_span_longer_than_two_hours() {
        assert!(!is_valid_span(&interval("09:00-11:30")));
    }

    #[test]
    fn should_reject_misaligned_span() {
        assert!(!is_valid_span(&interval("09:15-10:15")));
        assert!(!is_valid_span(&interval("09:00-10:15")));
    }

    #[test]
    fn should_reject_span_outside_operating_window() {
        assert!(!is_valid_span(&interval("07:30-08:30")));
        assert!(!is_valid_span(&interval("20:30-21:30")));
    }

    #[test]
    fn should_reject_inverted_or_empty_span() {
        assert!(!is_valid_span(&interval("10:00-09:00")));
        assert!(!is_valid_span(&interval("10:00-10:00")));
    }

    #[test]
    fn should_split_compound_span_into_base_slots() {
        let slots = base_slots_of(&interval("17:00-19:30"));

        let rendered: Vec<String> = slots.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "17:00-17:30",
                "17:30-18:00",
                "18:00-18:30",
                "18:30-19:00",
                "19:00-19:30"
            ]
        );
    }

    #[test]
    fn should_split_single_slot_span_into_itself() {
        let slots = base_slots_of(&interval("09:00-09:30"));

        assert_eq!(slots, vec![interval("09:00-09:30")]);
    }

    #[test]
    fn should_exclude_booked_slots_from_free_list() {
        let booked = vec![interval("09:00-10:00")];

        let free = free_slots(&booked);

        assert_eq!(free.len(), 23);
        assert!(free.iter().all(|slot| !slot.overlaps(&booked[0])));
        assert!(free.contains(&interval("10:00-10:30")));
        assert!(free.contains(&interval("08:30-09:00")));
    }

    #[test]
    fn should_return_full_grid_when_nothing_is_booked() {
        assert_eq!(free_slots(&[]), base_slots());
    }

    #[test]
    fn should_compute_identical_free_slots_for_identical_input() {
        let booked = vec![interval("11:00-12:30"), interval("15:00-15:30")];

        assert_eq!(free_slots(&booked), free_slots(&booked));
    }
}
