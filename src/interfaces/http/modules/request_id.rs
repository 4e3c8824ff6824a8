//! Request correlation
//!
//! Every request gets an `X-Request-Id`, reused when the client sent a usable
//! one. The id is recorded on a tracing span around the handler, so handler
//! and repository logs carry it, and is echoed on the response.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Router};
    use tower::Service;

    async fn echoed_id(header: Option<&str>) -> String {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(request_id_middleware));
        let mut req = Request::builder().uri("/");
        if let Some(h) = header {
            req = req.header(REQUEST_ID_HEADER, h);
        }
        let resp = app
            .into_service()
            .call(req.body(Body::empty()).unwrap())
            .await
            .unwrap();
        resp.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn reuses_client_id() {
        assert_eq!(echoed_id(Some("trace-abc")).await, "trace-abc");
    }

    #[tokio::test]
    async fn generates_id_when_absent_or_oversized() {
        let generated = echoed_id(None).await;
        assert!(Uuid::parse_str(&generated).is_ok());

        let long = "x".repeat(200);
        let replaced = echoed_id(Some(&long)).await;
        assert_ne!(replaced, long);
        assert!(Uuid::parse_str(&replaced).is_ok());
    }
}
