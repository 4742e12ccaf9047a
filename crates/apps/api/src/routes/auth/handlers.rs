use crate::api_state::ApiContext;
use crate::auth::middleware::extract_token;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use services::api::auth::error::AuthError;
use services::api::auth::interfaces::TokenResponse;
use services::api::auth::service::{
    authorize_url, exchange_code, fetch_userinfo, grant_admin_token, validate_id_token,
};
use services::api::auth::token::oauth_state;
use tracing::{info, instrument};

const STATE_COOKIE: &str = "oauthstate";

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub state: String,
    pub code: String,
}

/// Starts the OAuth sign-in: stores a random state value in a cookie and
/// sends the browser to the provider.
pub async fn login_handler(
    State(context): State<ApiContext>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), AuthError> {
    let state = oauth_state();
    let url = authorize_url(&context.settings.auth.oauth, &state)?;

    let cookie = Cookie::build((STATE_COOKIE, state))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Redirect::temporary(&url)))
}

/// Completes the OAuth sign-in: checks the state cookie, exchanges the
/// code, and issues the admin token if the profile is the admin account.
#[instrument(skip_all)]
pub async fn callback_handler(
    State(context): State<ApiContext>,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> Result<Json<TokenResponse>, AuthError> {
    let expected = jar.get(STATE_COOKIE).ok_or(AuthError::StateMismatch)?;
    if expected.value() != query.state {
        return Err(AuthError::StateMismatch);
    }

    let oauth = &context.settings.auth.oauth;
    let access_token = exchange_code(&context.http_client, oauth, &query.code).await?;
    let user = fetch_userinfo(&context.http_client, oauth, &access_token).await?;
    info!("OAuth callback for {}", user.email);

    let token = grant_admin_token(
        &context.settings.auth,
        &context.settings.secrets.jwt,
        &user,
    )?;
    Ok(Json(TokenResponse { token }))
}

/// Trades a provider ID token (bearer header) for an admin token.
#[instrument(skip_all)]
pub async fn google_token_handler(
    State(context): State<ApiContext>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, AuthError> {
    let id_token = extract_token(&headers)?;
    let user = validate_id_token(
        &context.http_client,
        &context.settings.auth.oauth,
        &id_token,
    )
    .await?;

    let token = grant_admin_token(
        &context.settings.auth,
        &context.settings.secrets.jwt,
        &user,
    )?;
    Ok(Json(TokenResponse { token }))
}

/// Probe for the admin frontend: reachable only through the admin gate.
pub async fn verify_handler() -> StatusCode {
    StatusCode::OK
}
