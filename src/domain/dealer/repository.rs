use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{Dealer, NewDealer};
use crate::domain::DomainResult;

#[async_trait]
pub trait DealerRepository: Send + Sync {
    async fn create_dealer(&self, dealer: NewDealer) -> DomainResult<Dealer>;
    async fn get_dealer(&self, id: &str) -> DomainResult<Option<Dealer>>;
    async fn get_dealer_by_user_id(&self, user_id: &str) -> DomainResult<Option<Dealer>>;
    async fn update_dealer_subscription(
        &self,
        id: &str,
        subscription_type: &str,
        expires_at: DateTime<Utc>,
    ) -> DomainResult<()>;
    async fn get_all_dealers(&self) -> DomainResult<Vec<Dealer>>;
}
