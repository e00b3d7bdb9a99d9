use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::room::entity::room::Building;

/// 슬롯 점유 테이블
///
/// 승인 대상(pending/approved) 예약이 차지하는 기본 슬롯을 1행씩 기록합니다.
/// (building, room, date, slot_start) 유니크 인덱스가 이중 예약을 차단하는
/// 최종 권위이며, 거절/삭제 시 해당 행을 지워 슬롯을 즉시 반환합니다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "slot_claim")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub slot_claim_id: i64,
    pub booking_id: i64,
    pub building: Building,
    pub room: String,
    pub date: Date,
    pub slot_start: Time,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking_request::Entity",
        from = "Column::BookingId",
        to = "super::booking_request::Column::BookingId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    BookingRequest,
}

impl Related<super::booking_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
