use async_trait::async_trait;

use super::model::{EvStation, NewEvStation};
use crate::domain::DomainResult;

#[async_trait]
pub trait EvStationRepository: Send + Sync {
    async fn create_ev_station(&self, station: NewEvStation) -> DomainResult<EvStation>;
    async fn get_ev_station(&self, id: &str) -> DomainResult<Option<EvStation>>;
    async fn get_ev_station_by_user_id(&self, user_id: &str) -> DomainResult<Option<EvStation>>;
    async fn get_all_ev_stations(&self) -> DomainResult<Vec<EvStation>>;
    async fn update_ev_station_availability(&self, id: &str, availability: &str)
        -> DomainResult<()>;
}
