//! Tyre DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Tyre;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TyreDto {
    pub id: String,
    pub dealer_id: String,
    pub brand: String,
    pub model: String,
    /// e.g. "205/55 R16"
    pub size: String,
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Tyre> for TyreDto {
    fn from(t: Tyre) -> Self {
        Self {
            id: t.id,
            dealer_id: t.dealer_id,
            brand: t.brand,
            model: t.model,
            size: t.size,
            price: t.price,
            stock: t.stock,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTyreRequest {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    #[validate(length(min = 1, max = 50))]
    pub size: String,
    #[validate(custom(function = "crate::interfaces::http::common::rules::non_negative"))]
    pub price: Decimal,
    #[validate(range(min = 0))]
    pub stock: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStockRequest {
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TyreSearchParams {
    /// Exact brand name
    pub brand: Option<String>,
}
