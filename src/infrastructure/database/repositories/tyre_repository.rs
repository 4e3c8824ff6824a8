//! SeaORM implementation of TyreRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::new_id;
use crate::domain::{DomainError, DomainResult, NewTyre, Tyre, TyreRepository};
use crate::infrastructure::database::entities::tyre;
use crate::shared::{from_minor_units, to_minor_units};

fn entity_to_domain(t: tyre::Model) -> Tyre {
    Tyre {
        id: t.id,
        dealer_id: t.dealer_id,
        brand: t.brand,
        model: t.model,
        size: t.size,
        price: from_minor_units(t.price_minor),
        stock: t.stock,
        created_at: t.created_at,
    }
}

pub struct SeaOrmTyreRepository {
    db: DatabaseConnection,
}

impl SeaOrmTyreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TyreRepository for SeaOrmTyreRepository {
    async fn create_tyre(&self, t: NewTyre) -> DomainResult<Tyre> {
        let model = tyre::ActiveModel {
            id: Set(new_id()),
            dealer_id: Set(t.dealer_id),
            brand: Set(t.brand),
            model: Set(t.model),
            size: Set(t.size),
            price_minor: Set(to_minor_units(t.price)?),
            stock: Set(t.stock),
            created_at: Set(Utc::now()),
        };
        let created = model.insert(&self.db).await?;
        Ok(entity_to_domain(created))
    }

    async fn get_tyre(&self, id: &str) -> DomainResult<Option<Tyre>> {
        let model = tyre::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_tyres_by_dealer_id(&self, dealer_id: &str) -> DomainResult<Vec<Tyre>> {
        let models = tyre::Entity::find()
            .filter(tyre::Column::DealerId.eq(dealer_id))
            .order_by_asc(tyre::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn get_all_tyres(&self) -> DomainResult<Vec<Tyre>> {
        let models = tyre::Entity::find()
            .order_by_asc(tyre::Column::Brand)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn get_tyres_by_brand(&self, brand: &str) -> DomainResult<Vec<Tyre>> {
        let models = tyre::Entity::find()
            .filter(tyre::Column::Brand.eq(brand))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update_tyre_stock(&self, id: &str, stock: i32) -> DomainResult<()> {
        let existing = tyre::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Tyre", "id", id))?;

        let mut active: tyre::ActiveModel = existing.into();
        active.stock = Set(stock);
        active.update(&self.db).await?;
        Ok(())
    }
}
