use chrono::{DateTime, Utc};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Customer rating left after a booking
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub id: String,
    pub booking_id: String,
    pub customer_id: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub booking_id: String,
    pub customer_id: String,
    pub rating: i32,
    pub comment: Option<String>,
}
