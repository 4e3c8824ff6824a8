use async_trait::async_trait;

use super::model::{Feedback, NewFeedback};
use crate::domain::DomainResult;

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create_feedback(&self, feedback: NewFeedback) -> DomainResult<Feedback>;

    /// One feedback per booking is expected; the first one found is returned.
    async fn get_feedback_by_booking_id(&self, booking_id: &str) -> DomainResult<Option<Feedback>>;
}
