//! Dealer DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Dealer;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerDto {
    pub id: String,
    pub user_id: String,
    pub business_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub subscription_type: String,
    pub subscription_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Dealer> for DealerDto {
    fn from(d: Dealer) -> Self {
        Self {
            id: d.id,
            user_id: d.user_id,
            business_name: d.business_name,
            address: d.address,
            phone: d.phone,
            subscription_type: d.subscription_type,
            subscription_expires_at: d.subscription_expires_at,
            created_at: d.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealerRequest {
    #[validate(length(min = 1, max = 200, message = "business name is required"))]
    pub business_name: String,
    #[validate(length(min = 1, max = 500, message = "address is required"))]
    pub address: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionRequest {
    #[validate(length(min = 1, max = 50))]
    pub subscription_type: String,
    pub expires_at: DateTime<Utc>,
}
