//! In-process router harness for handler tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::Service;

use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig, SessionClaims};
use crate::infrastructure::database::test_support::test_db;
use crate::infrastructure::database::SeaOrmRepositoryProvider;

use super::create_api_router;

/// Subject listed as administrator in every test router
pub const ADMIN: &str = "sub-admin";

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
    jwt: JwtConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = test_db().await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let jwt = JwtConfig {
            secret: "handler-test-secret".into(),
            issuer: "handler-tests".into(),
        };
        let router = create_api_router(
            repos.clone(),
            db.clone(),
            jwt.clone(),
            vec![ADMIN.to_string()],
        );
        Self {
            router,
            db,
            repos,
            jwt,
        }
    }

    pub fn token(&self, claims: &SessionClaims) -> String {
        create_token(claims, &self.jwt).unwrap()
    }

    pub fn claims(&self, sub: &str) -> SessionClaims {
        SessionClaims::new(sub, Duration::hours(1), &self.jwt)
    }

    /// Send a request as `sub` (unauthenticated when `None`)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        sub: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(sub) = sub {
            let token = self.token(&self.claims(sub));
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let req = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.call(req).await
    }

    pub async fn call(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().into_service().call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, sub: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(sub), None).await
    }

    pub async fn post(&self, uri: &str, sub: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(sub), Some(body)).await
    }

    pub async fn put(&self, uri: &str, sub: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(sub), Some(body)).await
    }
}
