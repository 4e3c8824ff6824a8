//! Authentication middleware for Axum

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, SessionClaims};
use crate::interfaces::http::common::ErrorResponse;

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
}

/// Token settings plus the subjects granted admin access
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
    pub admin_subjects: Arc<HashSet<String>>,
}

impl AuthState {
    pub fn new(jwt_config: JwtConfig, admin_subjects: impl IntoIterator<Item = String>) -> Self {
        Self {
            jwt_config,
            admin_subjects: Arc::new(admin_subjects.into_iter().collect()),
        }
    }
}

/// Caller identity, inserted into request extensions by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    /// Identity subject, also the user id
    pub user_id: String,
    pub claims: SessionClaims,
    pub is_admin: bool,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: SessionClaims, state: &AuthState) -> Self {
        Self {
            user_id: claims.sub.clone(),
            is_admin: state.admin_subjects.contains(&claims.sub),
            claims,
        }
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Bearer-token authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            if claims.is_expired() {
                return auth_error_response(AuthError::ExpiredToken);
            }
            let user = AuthenticatedUser::from_claims(claims, &auth_state);
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            debug!("Rejected session token: {}", e);
            auth_error_response(AuthError::InvalidToken)
        }
    }
}

fn auth_error_response(error: AuthError) -> Response {
    let message = match error {
        AuthError::MissingToken => "Unauthorized",
        AuthError::InvalidToken => "Invalid authentication token",
        AuthError::ExpiredToken => "Token has expired",
    };

    (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::create_token;
    use axum::{middleware, routing::get, Extension, Router};
    use chrono::Duration;
    use tower::Service;

    fn state() -> AuthState {
        AuthState::new(
            JwtConfig {
                secret: "mw-secret".into(),
                issuer: "mw-issuer".into(),
            },
            vec!["sub-admin".to_string()],
        )
    }

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        format!("{}:{}", user.user_id, user.is_admin)
    }

    async fn call(auth_header: Option<String>) -> (StatusCode, String) {
        let state = state();
        let app = Router::new()
            .route("/me", get(whoami))
            .layer(middleware::from_fn_with_state(state, auth_middleware));

        let mut req = Request::builder().uri("/me");
        if let Some(h) = auth_header {
            req = req.header(header::AUTHORIZATION, h);
        }
        let resp = app
            .into_service()
            .call(req.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn bearer(sub: &str, ttl: Duration) -> String {
        let cfg = state().jwt_config;
        let token = create_token(&SessionClaims::new(sub, ttl, &cfg), &cfg).unwrap();
        format!("Bearer {}", token)
    }

    #[tokio::test]
    async fn missing_header_is_401() {
        let (status, body) = call(None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("\"message\""));
    }

    #[tokio::test]
    async fn malformed_and_forged_tokens_are_401() {
        assert_eq!(call(Some("Token abc".into())).await.0, StatusCode::UNAUTHORIZED);
        assert_eq!(call(Some("Bearer ".into())).await.0, StatusCode::UNAUTHORIZED);
        assert_eq!(
            call(Some("Bearer not.a.jwt".into())).await.0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            call(Some(bearer("sub-1", Duration::minutes(-10)))).await.0,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn valid_token_exposes_subject_and_admin_flag() {
        let (status, body) = call(Some(bearer("sub-1", Duration::hours(1)))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "sub-1:false");

        let (_, body) = call(Some(bearer("sub-admin", Duration::hours(1)))).await;
        assert_eq!(body, "sub-admin:true");
    }
}
