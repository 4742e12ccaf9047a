use crate::api_state::ApiContext;
use axum::extract::{FromRequestParts, State};
use color_eyre::eyre::eyre;
use http::header;
use http::request::Parts;
use services::api::auth::error::AuthError;
use services::api::auth::interfaces::AdminClaims;
use services::api::auth::token::decode_admin_token;

/// Extractor gating the admin subtree: verifies the bearer token's
/// signature, expiry, and admin role. Any failure rejects with 401.
#[derive(Clone, Debug)]
pub struct AdminToken(pub AdminClaims);

impl<S> FromRequestParts<S> for AdminToken
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)?;
        let context = extract_context(parts, state).await?;
        let claims = decode_admin_token(&context.settings.secrets.jwt, &token)?;
        Ok(Self(claims))
    }
}

pub async fn extract_context<S>(parts: &mut Parts, state: &S) -> Result<ApiContext, AuthError>
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    match State::<ApiContext>::from_request_parts(parts, state).await {
        Ok(State(context)) => Ok(context),
        Err(_e) => Err(AuthError::Internal(eyre!(
            "Server state is not configured correctly."
        ))),
    }
}

/// Get auth token from Authorization Header.
pub fn extract_token(headers: &http::HeaderMap) -> Result<String, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(ToOwned::to_owned)
        .ok_or(AuthError::InvalidToken)
}
