use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::room::entity::room::Building;

/// 예약 요청 상태
///
/// pending -> approved | rejected 로만 전이하며 둘 다 종결 상태입니다.
/// 취소는 상태 전이가 아니라 삭제로 모델링합니다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "BookingStatus")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl BookingStatus {
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(BookingStatus::Pending),
            "approved" => Some(BookingStatus::Approved),
            "rejected" => Some(BookingStatus::Rejected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub booking_id: i64,

    // 신청자 정보 (제출 시점에 토큰에서 캡처, 이후 재파생하지 않음)
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,

    // 예약 내용
    pub building: Building,
    pub room: String,
    pub date: Date,
    /// "HH:MM-HH:MM" 구간 인코딩 (기본 슬롯 또는 최대 2시간 연속 구간)
    pub time_slot: String,
    #[sea_orm(column_type = "Text")]
    pub purpose: String,

    // 상태 및 메타데이터
    pub status: BookingStatus,
    pub request_date: DateTime,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::slot_claim::Entity")]
    SlotClaim,
}

impl Related<super::slot_claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SlotClaim.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
