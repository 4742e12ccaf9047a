use crate::api::auth::error::AuthError;
use crate::api::auth::interfaces::AdminClaims;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::{RngCore, rng};

pub const ADMIN_ROLE: &str = "admin";
const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Mints a signed admin token valid for 24 hours.
///
/// # Errors
///
/// * `AuthError::Internal` if token encoding fails.
pub fn issue_admin_token(jwt_secret: &str) -> Result<String, AuthError> {
    let exp = (Utc::now() + Duration::hours(TOKEN_EXPIRY_HOURS)).timestamp();
    let claims = AdminClaims {
        user_role: ADMIN_ROLE.to_string(),
        exp,
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

/// Verifies a bearer token's signature and expiry and checks that it
/// actually carries the admin role.
///
/// # Errors
///
/// * `AuthError::InvalidToken` for bad signatures, expired tokens, or
///   tokens without the admin role.
pub fn decode_admin_token(jwt_secret: &str, token: &str) -> Result<AdminClaims, AuthError> {
    let data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AuthError::InvalidToken)?;

    if data.claims.user_role != ADMIN_ROLE {
        return Err(AuthError::InvalidToken);
    }
    Ok(data.claims)
}

/// Generates the random state value tied to an OAuth login attempt.
pub fn oauth_state() -> String {
    let mut bytes = [0u8; 16];
    rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
