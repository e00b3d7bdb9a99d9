use axum::{
    async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::header::COOKIE,
    http::request::Parts,
};

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::jwt::{decode_token, Claims};

/// 쿠키 이름 상수
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// 인증된 사용자 정보를 담는 Extractor
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// JWT Claims에서 사용자 ID를 추출합니다.
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid user identity in token".to_string()))
    }
}

/// 심사 권한 확인: admin 또는 faculty만 예약을 승인/거절할 수 있습니다.
pub fn ensure_reviewer(claims: &Claims) -> Result<(), AppError> {
    match claims.role.as_str() {
        "admin" | "faculty" => Ok(()),
        _ => Err(AppError::Forbidden(
            "Admin or faculty role required".to_string(),
        )),
    }
}

/// 관리자 권한 확인
pub fn ensure_admin(claims: &Claims) -> Result<(), AppError> {
    if claims.role == "admin" {
        Ok(())
    } else {
        Err(AppError::Forbidden("Admin role required".to_string()))
    }
}

/// 소유권 확인: 본인(이메일 기준) 또는 관리자만 허용
pub fn ensure_owner_or_admin(claims: &Claims, owner_email: &str) -> Result<(), AppError> {
    if claims.role == "admin" || claims.email == owner_email {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You can only delete your own booking requests".to_string(),
        ))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출 시도
        let token = if let Some(auth_header) = parts.headers.get(AUTHORIZATION) {
            let auth_header_str = auth_header
                .to_str()
                .map_err(|_| AppError::Unauthorized("Malformed Authorization header".to_string()))?;

            let bearer = auth_header_str
                .strip_prefix("Bearer ")
                .ok_or_else(|| AppError::Unauthorized("Access token required".to_string()))?;

            bearer.to_string()
        } else {
            // 2. 쿠키에서 토큰 추출 시도
            extract_token_from_cookie(parts)?
        };

        // 토큰 검증 및 디코딩
        let claims = decode_token(&token, &state.config.jwt_secret)?;

        Ok(AuthUser(claims))
    }
}

/// 쿠키에서 access_token 추출
fn extract_token_from_cookie(parts: &Parts) -> Result<String, AppError> {
    let cookie_header = parts
        .headers
        .get(COOKIE)
        .ok_or_else(|| AppError::Unauthorized("Access token required".to_string()))?;

    let cookie_str = cookie_header
        .to_str()
        .map_err(|_| AppError::Unauthorized("Malformed cookie header".to_string()))?;

    // 쿠키 파싱: "name1=value1; name2=value2" 형식
    for cookie in cookie_str.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", ACCESS_TOKEN_COOKIE)) {
            if !value.is_empty() {
                return Ok(value.to_string());
            }
        }
    }

    Err(AppError::Unauthorized("Access token required".to_string()))
}
