use app_state::AppSettings;
use axum::extract::FromRef;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ApiContext {
    pub pool: SqlitePool,
    pub http_client: reqwest::Client,
    pub settings: AppSettings,
}

// These impls allow Axum to extract the SqlitePool and reqwest::Client from the state.
// This is useful for middleware and extractors that might only need one part of the state.
impl FromRef<ApiContext> for SqlitePool {
    fn from_ref(state: &ApiContext) -> Self {
        state.pool.clone()
    }
}

impl FromRef<ApiContext> for reqwest::Client {
    fn from_ref(state: &ApiContext) -> Self {
        state.http_client.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
