use async_trait::async_trait;

use super::model::{NewTyre, Tyre};
use crate::domain::DomainResult;

#[async_trait]
pub trait TyreRepository: Send + Sync {
    async fn create_tyre(&self, tyre: NewTyre) -> DomainResult<Tyre>;
    async fn get_tyre(&self, id: &str) -> DomainResult<Option<Tyre>>;
    async fn get_tyres_by_dealer_id(&self, dealer_id: &str) -> DomainResult<Vec<Tyre>>;
    async fn get_all_tyres(&self) -> DomainResult<Vec<Tyre>>;
    async fn get_tyres_by_brand(&self, brand: &str) -> DomainResult<Vec<Tyre>>;
    async fn update_tyre_stock(&self, id: &str, stock: i32) -> DomainResult<()>;
}
