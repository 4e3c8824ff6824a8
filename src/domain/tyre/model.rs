use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Tyre listing in a dealer's catalogue
#[derive(Clone, Debug, PartialEq)]
pub struct Tyre {
    pub id: String,
    pub dealer_id: String,
    pub brand: String,
    pub model: String,
    pub size: String,
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

impl Tyre {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[derive(Debug, Clone)]
pub struct NewTyre {
    pub dealer_id: String,
    pub brand: String,
    pub model: String,
    pub size: String,
    pub price: Decimal,
    pub stock: i32,
}
