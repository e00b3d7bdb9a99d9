use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::info;
use validator::Validate;

use crate::domain::booking::dto::Pagination;
use crate::state::AppState;
use crate::utils::auth::ensure_admin;
use crate::utils::error::AppError;
use crate::utils::jwt::Claims;

use super::dto::{UpdateRoleRequest, UserListQuery, UserListResponse, UserResponse};
use super::entity::user::{self, Role};

pub struct UserService;

impl UserService {
    /// 사용자 목록 조회 (관리자 전용)
    pub async fn list(
        state: &AppState,
        claims: &Claims,
        query: UserListQuery,
    ) -> Result<UserListResponse, AppError> {
        ensure_admin(claims)?;

        let mut select = user::Entity::find().filter(user::Column::IsActive.eq(true));

        if let Some(raw) = &query.role {
            select = select.filter(user::Column::Role.eq(parse_role(raw)?));
        }
        if let Some(department) = &query.department {
            select = select.filter(user::Column::Department.contains(department));
        }
        if let Some(search) = &query.search {
            select = select.filter(
                Condition::any()
                    .add(user::Column::Name.contains(search))
                    .add(user::Column::Email.contains(search))
                    .add(user::Column::StudentId.contains(search)),
            );
        }

        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(20).clamp(1, 100);

        let total = select
            .clone()
            .count(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let rows = select
            .order_by_desc(user::Column::CreatedAt)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(UserListResponse {
            users: rows.into_iter().map(UserResponse::from).collect(),
            pagination: Pagination {
                current: page,
                pages: total.div_ceil(limit),
                total,
            },
        })
    }

    /// 사용자 단건 조회 (관리자 전용)
    pub async fn get(
        state: &AppState,
        claims: &Claims,
        user_id: i64,
    ) -> Result<UserResponse, AppError> {
        ensure_admin(claims)?;

        user::Entity::find_by_id(user_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::UserNotFound("User not found".to_string()))
    }

    /// 역할 변경 (관리자 전용)
    ///
    /// 관리자가 자기 자신의 역할을 바꾸는 것은 허용하지 않습니다.
    pub async fn update_role(
        state: &AppState,
        claims: &Claims,
        user_id: i64,
        req: UpdateRoleRequest,
    ) -> Result<UserResponse, AppError> {
        ensure_admin(claims)?;
        req.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        ensure_not_self(claims, user_id)?;
        let role = parse_role(&req.role)?;

        let existing = user::Entity::find_by_id(user_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::UserNotFound("User not found".to_string()))?;

        let mut active: user::ActiveModel = existing.into();
        active.role = Set(role);
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(user_id = user_id, role = %req.role, "User role updated");

        Ok(updated.into())
    }
}

/// 역할 파싱
pub fn parse_role(raw: &str) -> Result<Role, AppError> {
    Role::from_label(raw).ok_or_else(|| AppError::ValidationError(format!("Invalid role: {}", raw)))
}

/// 자기 자신의 역할 변경 차단
pub fn ensure_not_self(claims: &Claims, user_id: i64) -> Result<(), AppError> {
    if claims.sub.parse::<i64>() == Ok(user_id) {
        return Err(AppError::BadRequest(
            "You cannot change your own role".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            name: "Admin".to_string(),
            email: "admin@campus.edu".to_string(),
            student_id: "ADMIN001".to_string(),
            department: "Administration".to_string(),
            role: "admin".to_string(),
            iat: 0,
            exp: 0,
        }
    }

    #[test]
    fn should_parse_known_roles() {
        assert_eq!(parse_role("student").unwrap(), Role::Student);
        assert_eq!(parse_role("faculty").unwrap(), Role::Faculty);
        assert_eq!(parse_role("admin").unwrap(), Role::Admin);
    }

    #[test]
    fn should_reject_unknown_role() {
        assert!(matches!(
            parse_role("superuser"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn should_block_changing_own_role() {
        let claims = admin_claims("42");

        let result = ensure_not_self(&claims, 42);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn should_allow_changing_another_users_role() {
        let claims = admin_claims("42");

        assert!(ensure_not_self(&claims, 7).is_ok());
    }
}
