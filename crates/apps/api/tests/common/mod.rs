use api::api_state::ApiContext;
use api::create_router;
use app_state::{
    ApiSettings, AppSettings, AssetSettings, AuthSettings, OAuthSettings, SecretSettings,
};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use services::api::auth::token::issue_admin_token;
use services::database;
use tempfile::TempDir;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test-secret";

pub struct TestApp {
    pub router: Router,
    // Held so the asset dirs outlive the test.
    _assets: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let assets = tempfile::tempdir().expect("tempdir");
    let public_dir = assets.path().join("public");
    let deleted_dir = assets.path().join("deleted");
    std::fs::create_dir_all(&public_dir).expect("public dir");
    std::fs::create_dir_all(&deleted_dir).expect("deleted dir");

    let settings = AppSettings {
        api: ApiSettings {
            host: "127.0.0.1".into(),
            port: 0,
            public_url: "http://localhost".into(),
            allowed_origins: vec!["http://localhost:3000".into()],
        },
        assets: AssetSettings {
            public_dir,
            deleted_dir,
            url_prefix: "/assets".into(),
        },
        auth: AuthSettings {
            admin_account: "admin@example.com".into(),
            oauth: OAuthSettings {
                client_id: "client".into(),
                client_secret: "secret".into(),
                redirect_url: "http://localhost/auth/google/callback".into(),
                auth_url: "http://localhost/never/auth".into(),
                token_url: "http://localhost/never/token".into(),
                userinfo_url: "http://localhost/never/userinfo".into(),
                tokeninfo_url: "http://localhost/never/tokeninfo".into(),
            },
        },
        secrets: SecretSettings {
            jwt: JWT_SECRET.into(),
            database_url: "sqlite::memory:".into(),
        },
    };

    let pool = database::connect(&settings.secrets.database_url)
        .await
        .expect("database");

    let router = create_router(ApiContext {
        pool,
        http_client: reqwest::Client::new(),
        settings,
    });

    TestApp {
        router,
        _assets: assets,
    }
}

pub fn admin_token() -> String {
    issue_admin_token(JWT_SECRET).expect("token")
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.expect("infallible")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
    }

    pub async fn admin_json(
        &self,
        method: &str,
        uri: &str,
        body: Value,
    ) -> Response<Body> {
        self.request(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", admin_token()))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
    }

    pub async fn admin_get(&self, uri: &str) -> Response<Body> {
        self.request(
            Request::builder()
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", admin_token()))
                .body(Body::empty())
                .expect("request"),
        )
        .await
    }

    pub async fn admin_delete(&self, uri: &str) -> Response<Body> {
        self.request(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", admin_token()))
                .body(Body::empty())
                .expect("request"),
        )
        .await
    }
}

pub async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
