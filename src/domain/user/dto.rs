use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::user::{self, Role};
use crate::domain::booking::dto::Pagination;

/// 사용자 프로필 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            user_id: model.user_id,
            name: model.name,
            email: model.email,
            student_id: model.student_id,
            department: model.department,
            role: model.role,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

/// 사용자 목록 조회 쿼리 파라미터
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct UserListQuery {
    /// student | faculty | admin
    pub role: Option<String>,
    pub department: Option<String>,
    /// 이름/이메일/학번 부분 일치 검색
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// 역할 변경 바디 (관리자 전용)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    /// student | faculty | admin
    #[validate(length(min = 1, message = "Role is required"))]
    #[schema(example = "faculty")]
    pub role: String,
}

/// 사용자 목록 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub pagination: Pagination,
}

/// 사용자 단건 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessUserResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: UserResponse,
}

/// 사용자 목록 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessUserListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: UserListResponse,
}
