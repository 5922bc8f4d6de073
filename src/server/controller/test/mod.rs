use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{
    config::JwtConfig, router::router, service::token::TokenService, state::AppState,
};


/// Router wired to a fresh in-memory database.
struct TestApp {
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_board_tables().build().await.unwrap();
        let db = test.db.unwrap();
        let tokens = TokenService::new(&JwtConfig {
            secret: "controller-secret".to_string(),
            issuer: "simpleboard".to_string(),
            expiration_hours: 1,
        });

        Self {
            app: router().with_state(AppState::new(db, tokens)),
        }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Registers a member and returns an access token for it.
    async fn sign_up_and_in(&self, nickname: &str) -> String {
        let (status, _) = self
            .send(
                Method::POST,
                "/api/v1/auth/sign-up",
                None,
                Some(json!({
                    "nickname": nickname,
                    "email": format!("{}@example.com", nickname),
                    "password": "secret1",
                    "passwordCheck": "secret1",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/auth/sign-in",
                None,
                Some(json!({ "nickname": nickname, "password": "secret1" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        body["accessToken"].as_str().unwrap().to_string()
    }
}
