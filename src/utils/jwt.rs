use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AppError;

/// JWT Claims 구조체
///
/// 예약 제출 시점에 캡처되는 신청자 정보(name/email/studentId/department)와
/// 심사 권한 판정에 쓰이는 role을 함께 담습니다. 토큰 발급(로그인/가입)은
/// 외부 인증 서비스의 책임이고, 이 서버는 검증만 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (User ID)
    pub sub: String,
    /// 표시 이름 (reviewedBy에 기록됨)
    pub name: String,
    /// 이메일 (예약 소유권 판정 기준)
    pub email: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub department: String,
    /// student | faculty | admin
    pub role: String,
    /// Issued At
    pub iat: usize,
    /// Expiration
    pub exp: usize,
}

/// JWT 토큰 생성 (Access Token)
///
/// 운영 환경에서는 외부 인증 서비스가 발급합니다. 테스트와 로컬 도구에서
/// 동일한 클레임 형식의 토큰을 만들 때 사용합니다.
pub fn encode_token(mut claims: Claims, secret: &str, expiration_seconds: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::seconds(expiration_seconds))
        .expect("valid timestamp");

    claims.iat = now.timestamp() as usize;
    claims.exp = expiration.timestamp() as usize;

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token creation failed: {}", e)))
}

/// JWT 토큰 검증 및 디코딩
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Token has expired".to_string())
        }
        _ => AppError::Unauthorized("Invalid or expired token".to_string()),
    })
}
