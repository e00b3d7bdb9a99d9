use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 예약 가능한 건물 목록 (고정)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "Building")]
pub enum Building {
    #[sea_orm(string_value = "A Block")]
    #[serde(rename = "A Block")]
    ABlock,
    #[sea_orm(string_value = "C Block")]
    #[serde(rename = "C Block")]
    CBlock,
    #[sea_orm(string_value = "Main Auditorium")]
    #[serde(rename = "Main Auditorium")]
    MainAuditorium,
}

impl Building {
    /// 경로/쿼리 파라미터로 들어온 건물 이름 파싱
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw {
            "A Block" => Some(Building::ABlock),
            "C Block" => Some(Building::CBlock),
            "Main Auditorium" => Some(Building::MainAuditorium),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Building::ABlock => "A Block",
            Building::CBlock => "C Block",
            Building::MainAuditorium => "Main Auditorium",
        }
    }
}

/// 허용되는 편의시설 태그 (고정)
pub const AMENITIES: [&str; 7] = [
    "Projector",
    "WiFi",
    "Whiteboard",
    "AC",
    "Sound System",
    "Smart Board",
    "Video Conferencing",
];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub room_id: i64,
    pub building: Building,
    pub room_number: String,
    pub capacity: i32,
    /// 편의시설 태그 배열 (JSON)
    pub amenities: Json,
    pub is_active: bool,
    pub location: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
