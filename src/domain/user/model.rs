use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::shared::DomainError;

/// Marketplace role chosen by a user after signing in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Customer,
    Driver,
    Dealer,
    EvStation,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Customer,
        UserRole::Driver,
        UserRole::Dealer,
        UserRole::EvStation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Driver => "driver",
            Self::Dealer => "dealer",
            Self::EvStation => "ev_station",
        }
    }

    /// Dealers and drivers stay inactive until an administrator approves them.
    pub fn requires_approval(&self) -> bool {
        matches!(self, Self::Dealer | Self::Driver)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Customer
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Invalid role: {}", s)))
    }
}

/// User account, keyed by the identity provider's subject
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: UserRole,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the user may act in their role right now.
    pub fn is_active_in_role(&self) -> bool {
        !self.role.requires_approval() || self.is_approved
    }
}
