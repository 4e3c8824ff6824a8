//! JSON body extractor with `validator` rules applied
//!
//! A body that does not parse into the target type is a 400. A body that
//! parses but breaks a field rule is a 422 whose message lists each broken
//! rule as `field: message`, ordered by field name.

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::response::{api_error, bad_request, ApiError};

/// `Json<T>` that only yields values passing `T::validate()`
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| bad_request(format!("Invalid JSON: {}", rejection.body_text())))?;

        value.validate().map_err(|errors| {
            api_error(StatusCode::UNPROCESSABLE_ENTITY, describe(&errors))
        })?;
        Ok(ValidatedJson(value))
    }
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let parts: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();

    if parts.is_empty() {
        "Validation failed".to_string()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use serde_json::{json, Value};
    use tower::Service;

    #[derive(Debug, Deserialize, Validate)]
    struct StockBody {
        #[validate(length(min = 1, max = 10))]
        brand: String,
        #[validate(range(min = 0, max = 100, message = "out of range"))]
        stock: i32,
    }

    async fn accept(ValidatedJson(body): ValidatedJson<StockBody>) -> String {
        format!("{}:{}", body.brand, body.stock)
    }

    async fn submit(raw: impl Into<Body>) -> (StatusCode, Vec<u8>) {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/stock")
            .header(header::CONTENT_TYPE, "application/json")
            .body(raw.into())
            .unwrap();
        let resp = Router::new()
            .route("/stock", post(accept))
            .into_service()
            .call(req)
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    fn message(bytes: &[u8]) -> String {
        let body: Value = serde_json::from_slice(bytes).unwrap();
        body["message"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn passes_valid_body_through() {
        let (status, bytes) = submit(json!({ "brand": "Apollo", "stock": 12 }).to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"Apollo:12");
    }

    #[tokio::test]
    async fn unparseable_body_is_400() {
        let (status, bytes) = submit("not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message(&bytes).starts_with("Invalid JSON"));

        let (status, _) = submit(json!({ "brand": "Apollo" }).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn broken_rules_are_422_listed_by_field() {
        let (status, bytes) = submit(json!({ "brand": "", "stock": -1 }).to_string()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(message(&bytes), "brand: length; stock: out of range");
    }
}
