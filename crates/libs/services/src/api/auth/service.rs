use crate::api::auth::error::AuthError;
use crate::api::auth::interfaces::{AccessTokenResponse, TokenInfo, UserInfo};
use crate::api::auth::token::issue_admin_token;
use app_state::{AuthSettings, OAuthSettings};
use tracing::{info, instrument};

/// Builds the provider URL the browser is redirected to when signing in.
///
/// # Errors
///
/// * `AuthError::Internal` if the configured auth URL cannot be parsed.
pub fn authorize_url(oauth: &OAuthSettings, state: &str) -> Result<String, AuthError> {
    let url = reqwest::Url::parse_with_params(
        &oauth.auth_url,
        &[
            ("client_id", oauth.client_id.as_str()),
            ("redirect_uri", oauth.redirect_url.as_str()),
            ("response_type", "code"),
            ("scope", "profile email"),
            ("state", state),
        ],
    )?;
    Ok(url.into())
}

/// Trades the callback `code` for a provider access token.
///
/// # Errors
///
/// * `AuthError::Provider` if the provider rejects the exchange.
/// * `AuthError::Internal` on transport errors.
#[instrument(skip_all)]
pub async fn exchange_code(
    client: &reqwest::Client,
    oauth: &OAuthSettings,
    code: &str,
) -> Result<String, AuthError> {
    let response = client
        .post(&oauth.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", &oauth.client_id),
            ("client_secret", &oauth.client_secret),
            ("redirect_uri", &oauth.redirect_url),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AuthError::Provider(format!(
            "token exchange returned {}",
            response.status()
        )));
    }

    let tokens: AccessTokenResponse = response.json().await?;
    Ok(tokens.access_token)
}

/// Fetches the signed-in user's profile with the provider access token.
///
/// # Errors
///
/// * `AuthError::Provider` if the userinfo endpoint rejects the token.
/// * `AuthError::Internal` on transport errors.
#[instrument(skip_all)]
pub async fn fetch_userinfo(
    client: &reqwest::Client,
    oauth: &OAuthSettings,
    access_token: &str,
) -> Result<UserInfo, AuthError> {
    let response = client
        .get(&oauth.userinfo_url)
        .bearer_auth(access_token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AuthError::Provider(format!(
            "userinfo returned {}",
            response.status()
        )));
    }

    Ok(response.json().await?)
}

/// Validates a Google ID token via the tokeninfo endpoint and returns
/// the profile it asserts. The token must have been issued for our
/// client id.
///
/// # Errors
///
/// * `AuthError::InvalidToken` if the token fails validation or was
///   issued for another client.
#[instrument(skip_all)]
pub async fn validate_id_token(
    client: &reqwest::Client,
    oauth: &OAuthSettings,
    id_token: &str,
) -> Result<UserInfo, AuthError> {
    let response = client
        .get(&oauth.tokeninfo_url)
        .query(&[("id_token", id_token)])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AuthError::InvalidToken);
    }

    let info: TokenInfo = response.json().await?;
    if info.aud != oauth.client_id {
        return Err(AuthError::InvalidToken);
    }

    Ok(UserInfo {
        email: info.email,
        verified_email: info.email_verified == "true",
    })
}

/// Mints an admin token for the given profile, provided it belongs to
/// the configured admin account with a verified email.
///
/// # Errors
///
/// * `AuthError::NotAdmin` for any other account.
/// * `AuthError::Internal` if token encoding fails.
pub fn grant_admin_token(
    auth: &AuthSettings,
    jwt_secret: &str,
    user: &UserInfo,
) -> Result<String, AuthError> {
    if !user.verified_email || user.email != auth.admin_account {
        return Err(AuthError::NotAdmin {
            user_email: user.email.clone(),
        });
    }
    info!("Issuing admin token for {}", user.email);
    issue_admin_token(jwt_secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::token::decode_admin_token;

    fn oauth() -> OAuthSettings {
        OAuthSettings {
            client_id: "client-1".into(),
            client_secret: "s3cret".into(),
            redirect_url: "http://localhost:3000/auth/google/callback".into(),
            auth_url: "https://accounts.google.com/o/oauth2/auth".into(),
            token_url: "https://oauth2.googleapis.com/token".into(),
            userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".into(),
            tokeninfo_url: "https://oauth2.googleapis.com/tokeninfo".into(),
        }
    }

    #[test]
    fn authorize_url_escapes_the_redirect() {
        let url = authorize_url(&oauth(), "abc123").unwrap();
        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?client_id=client-1"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fcallback"));
        assert!(url.contains("state=abc123"));
    }

    #[test]
    fn only_the_verified_admin_account_gets_a_token() {
        let auth = AuthSettings {
            admin_account: "admin@example.com".into(),
            oauth: oauth(),
        };

        let stranger = UserInfo {
            email: "someone@example.com".into(),
            verified_email: true,
        };
        assert!(matches!(
            grant_admin_token(&auth, "sssh", &stranger),
            Err(AuthError::NotAdmin { .. })
        ));

        let unverified = UserInfo {
            email: "admin@example.com".into(),
            verified_email: false,
        };
        assert!(matches!(
            grant_admin_token(&auth, "sssh", &unverified),
            Err(AuthError::NotAdmin { .. })
        ));

        let admin = UserInfo {
            email: "admin@example.com".into(),
            verified_email: true,
        };
        let token = grant_admin_token(&auth, "sssh", &admin).unwrap();
        decode_admin_token("sssh", &token).unwrap();
    }
}
