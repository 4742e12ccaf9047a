use serde::Deserialize;
use std::path::PathBuf;

/// Which configuration overlay and env-var suffix to use.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Dev,
    Test,
    Prod,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Prod => "prod",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub assets: AssetSettings,
    pub auth: AuthSettings,
    pub secrets: SecretSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    pub public_url: String,
    pub allowed_origins: Vec<String>,
}

/// Where uploaded originals and thumbnails live on disk, and the URL
/// prefix they are served from.
#[derive(Debug, Deserialize, Clone)]
pub struct AssetSettings {
    pub public_dir: PathBuf,
    pub deleted_dir: PathBuf,
    pub url_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    /// Email of the single account allowed to obtain an admin token.
    pub admin_account: String,
    pub oauth: OAuthSettings,
}

/// OAuth2 provider configuration. The endpoint URLs default to Google's
/// but are overridable so the flow can be pointed at a stub provider.
#[derive(Debug, Deserialize, Clone)]
pub struct OAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_userinfo_url")]
    pub userinfo_url: String,
    #[serde(default = "default_tokeninfo_url")]
    pub tokeninfo_url: String,
}

fn default_auth_url() -> String {
    "https://accounts.google.com/o/oauth2/auth".to_string()
}

fn default_token_url() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_userinfo_url() -> String {
    "https://www.googleapis.com/oauth2/v2/userinfo".to_string()
}

fn default_tokeninfo_url() -> String {
    "https://oauth2.googleapis.com/tokeninfo".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub jwt: String,
    pub database_url: String,
}
