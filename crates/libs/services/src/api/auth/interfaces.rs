use serde::{Deserialize, Serialize};

/// Claims carried by the bearer token handed to the admin frontend.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminClaims {
    pub user_role: String,
    pub exp: i64,
}

/// The freshly minted admin token, returned from both sign-in flows.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response from the OAuth token endpoint when exchanging the callback code.
#[derive(Debug, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Profile returned by the provider's userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub verified_email: bool,
}

/// Response from the provider's tokeninfo endpoint for an ID token.
/// Google reports `email_verified` as the string "true" here.
#[derive(Debug, Deserialize)]
pub struct TokenInfo {
    pub aud: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: String,
}
