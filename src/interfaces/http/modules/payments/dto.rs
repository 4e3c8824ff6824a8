//! Payment DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Payment;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: String,
    pub user_id: String,
    pub booking_id: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    /// pending, completed, failed or refunded
    pub status: String,
    pub external_payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            booking_id: p.booking_id,
            amount: p.amount,
            currency: p.currency,
            status: p.status.as_str().to_string(),
            external_payment_id: p.external_payment_id,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[validate(custom(function = "crate::interfaces::http::common::rules::positive"))]
    pub amount: Decimal,
    /// ISO 4217 code
    #[validate(length(equal = 3, message = "currency must be a 3-letter code"))]
    pub currency: String,
    pub booking_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentStatusRequest {
    pub status: String,
    #[validate(length(min = 1, max = 200))]
    pub external_payment_id: Option<String>,
}
