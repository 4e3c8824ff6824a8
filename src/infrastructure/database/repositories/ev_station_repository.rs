//! SeaORM implementation of EvStationRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{new_id, write_err};
use crate::domain::ev_station::DEFAULT_AVAILABILITY;
use crate::domain::{DomainError, DomainResult, EvStation, EvStationRepository, NewEvStation};
use crate::infrastructure::database::entities::ev_station;

fn entity_to_domain(s: ev_station::Model) -> EvStation {
    EvStation {
        id: s.id,
        user_id: s.user_id,
        name: s.name,
        address: s.address,
        availability: s.availability,
        created_at: s.created_at,
    }
}

pub struct SeaOrmEvStationRepository {
    db: DatabaseConnection,
}

impl SeaOrmEvStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EvStationRepository for SeaOrmEvStationRepository {
    async fn create_ev_station(&self, s: NewEvStation) -> DomainResult<EvStation> {
        let model = ev_station::ActiveModel {
            id: Set(new_id()),
            user_id: Set(s.user_id),
            name: Set(s.name),
            address: Set(s.address),
            availability: Set(DEFAULT_AVAILABILITY.to_string()),
            created_at: Set(Utc::now()),
        };
        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, "User already operates a station"))?;

        info!("EV station registered: {} ({})", created.name, created.id);
        Ok(entity_to_domain(created))
    }

    async fn get_ev_station(&self, id: &str) -> DomainResult<Option<EvStation>> {
        let model = ev_station::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_ev_station_by_user_id(&self, user_id: &str) -> DomainResult<Option<EvStation>> {
        let model = ev_station::Entity::find()
            .filter(ev_station::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_all_ev_stations(&self) -> DomainResult<Vec<EvStation>> {
        let models = ev_station::Entity::find()
            .order_by_asc(ev_station::Column::Name)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update_ev_station_availability(
        &self,
        id: &str,
        availability: &str,
    ) -> DomainResult<()> {
        let existing = ev_station::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("EvStation", "id", id))?;

        let mut active: ev_station::ActiveModel = existing.into();
        active.availability = Set(availability.to_string());
        active.update(&self.db).await?;
        Ok(())
    }
}
