use chrono::{DateTime, Utc};

/// Availability assigned to newly registered stations
pub const DEFAULT_AVAILABILITY: &str = "available";

/// EV charging station listed on the marketplace
#[derive(Clone, Debug, PartialEq)]
pub struct EvStation {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub address: String,
    /// Free-form availability status ("available", "busy", "offline", ...)
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEvStation {
    pub user_id: String,
    pub name: String,
    pub address: String,
}
