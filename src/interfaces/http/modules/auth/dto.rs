//! Authentication DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{User, UserRole};

/// User record as returned to clients
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    /// customer, driver, dealer or ev_station
    pub role: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            profile_image_url: u.profile_image_url,
            role: u.role.as_str().to_string(),
            is_approved: u.is_approved,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Role selection. Kept untyped so that a missing, non-string or unknown
/// role all answer 400 "Invalid role".
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetRoleRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "dealer")]
    pub role: serde_json::Value,
}

impl SetRoleRequest {
    pub fn requested_role(&self) -> Option<UserRole> {
        self.role.as_str()?.parse().ok()
    }
}
