use chrono::{DateTime, Utc};

/// Subscription plan assigned to newly registered dealers
pub const DEFAULT_SUBSCRIPTION: &str = "basic";

/// Tyre dealer storefront, owned by a user with the dealer role
#[derive(Clone, Debug, PartialEq)]
pub struct Dealer {
    pub id: String,
    pub user_id: String,
    pub business_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub subscription_type: String,
    pub subscription_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Dealer {
    /// A dealer without an expiry date has a non-expiring plan.
    pub fn subscription_active_at(&self, at: DateTime<Utc>) -> bool {
        self.subscription_expires_at.map_or(true, |expires| at < expires)
    }
}

#[derive(Debug, Clone)]
pub struct NewDealer {
    pub user_id: String,
    pub business_name: String,
    pub address: String,
    pub phone: Option<String>,
}
