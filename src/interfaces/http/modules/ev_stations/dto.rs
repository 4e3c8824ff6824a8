//! EV station DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::EvStation;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvStationDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub address: String,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

impl From<EvStation> for EvStationDto {
    fn from(s: EvStation) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            name: s.name,
            address: s.address,
            availability: s.availability,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEvStationRequest {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 500, message = "address is required"))]
    pub address: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAvailabilityRequest {
    /// Free text, e.g. "available", "busy", "offline"
    #[validate(length(min = 1, max = 50))]
    pub availability: String,
}
