//! Booking DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Booking;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: String,
    pub customer_id: String,
    pub driver_id: Option<String>,
    pub tyre_id: Option<String>,
    pub pickup_address: String,
    pub dropoff_address: String,
    /// pending, assigned, in_progress, completed or cancelled
    pub status: String,
    pub fare: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            customer_id: b.customer_id,
            driver_id: b.driver_id,
            tyre_id: b.tyre_id,
            pickup_address: b.pickup_address,
            dropoff_address: b.dropoff_address,
            status: b.status.as_str().to_string(),
            fare: b.fare,
            created_at: b.created_at,
            completed_at: b.completed_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 500, message = "pickup address is required"))]
    pub pickup_address: String,
    #[validate(length(min = 1, max = 500, message = "dropoff address is required"))]
    pub dropoff_address: String,
    pub tyre_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CompleteBookingRequest {
    #[validate(custom(function = "crate::interfaces::http::common::rules::non_negative"))]
    pub fare: Decimal,
}
