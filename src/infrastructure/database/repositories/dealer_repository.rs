//! SeaORM implementation of DealerRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{new_id, write_err};
use crate::domain::dealer::DEFAULT_SUBSCRIPTION;
use crate::domain::{Dealer, DealerRepository, DomainError, DomainResult, NewDealer};
use crate::infrastructure::database::entities::dealer;

fn entity_to_domain(d: dealer::Model) -> Dealer {
    Dealer {
        id: d.id,
        user_id: d.user_id,
        business_name: d.business_name,
        address: d.address,
        phone: d.phone,
        subscription_type: d.subscription_type,
        subscription_expires_at: d.subscription_expires_at,
        created_at: d.created_at,
    }
}

pub struct SeaOrmDealerRepository {
    db: DatabaseConnection,
}

impl SeaOrmDealerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DealerRepository for SeaOrmDealerRepository {
    async fn create_dealer(&self, d: NewDealer) -> DomainResult<Dealer> {
        let model = dealer::ActiveModel {
            id: Set(new_id()),
            user_id: Set(d.user_id),
            business_name: Set(d.business_name),
            address: Set(d.address),
            phone: Set(d.phone),
            subscription_type: Set(DEFAULT_SUBSCRIPTION.to_string()),
            subscription_expires_at: Set(None),
            created_at: Set(Utc::now()),
        };
        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, "User already owns a dealer"))?;

        info!("Dealer created: {} ({})", created.business_name, created.id);
        Ok(entity_to_domain(created))
    }

    async fn get_dealer(&self, id: &str) -> DomainResult<Option<Dealer>> {
        let model = dealer::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_dealer_by_user_id(&self, user_id: &str) -> DomainResult<Option<Dealer>> {
        let model = dealer::Entity::find()
            .filter(dealer::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;
        Ok(model.map(entity_to_domain))
    }

    async fn update_dealer_subscription(
        &self,
        id: &str,
        subscription_type: &str,
        expires_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let existing = dealer::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Dealer", "id", id))?;

        let mut active: dealer::ActiveModel = existing.into();
        active.subscription_type = Set(subscription_type.to_string());
        active.subscription_expires_at = Set(Some(expires_at));
        active.update(&self.db).await?;

        info!(
            "Dealer {} subscription set to {} until {}",
            id, subscription_type, expires_at
        );
        Ok(())
    }

    async fn get_all_dealers(&self) -> DomainResult<Vec<Dealer>> {
        let models = dealer::Entity::find()
            .order_by_asc(dealer::Column::BusinessName)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::user::UserRole;
    use crate::infrastructure::database::test_support::{insert_user, test_db};
    use chrono::Duration;

    fn new_dealer(user_id: &str, name: &str) -> NewDealer {
        NewDealer {
            user_id: user_id.to_string(),
            business_name: name.to_string(),
            address: "7 Station Road".to_string(),
            phone: Some("+91 98450 00000".to_string()),
        }
    }

    #[tokio::test]
    async fn create_and_find_by_owner() {
        let db = test_db().await;
        insert_user(&db, "u-1", UserRole::Dealer, true).await;
        let repo = SeaOrmDealerRepository::new(db);

        let created = repo.create_dealer(new_dealer("u-1", "Grip Tyres")).await.unwrap();
        assert_eq!(created.subscription_type, DEFAULT_SUBSCRIPTION);
        assert!(created.subscription_expires_at.is_none());

        let found = repo.get_dealer_by_user_id("u-1").await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(repo.get_dealer_by_user_id("u-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn second_dealer_for_same_user_conflicts() {
        let db = test_db().await;
        insert_user(&db, "u-1", UserRole::Dealer, true).await;
        let repo = SeaOrmDealerRepository::new(db);

        repo.create_dealer(new_dealer("u-1", "One")).await.unwrap();
        let again = repo.create_dealer(new_dealer("u-1", "Two")).await;
        assert!(matches!(again, Err(DomainError::Conflict(_))));
    }

    #[tokio::test]
    async fn subscription_update() {
        let db = test_db().await;
        insert_user(&db, "u-1", UserRole::Dealer, true).await;
        let repo = SeaOrmDealerRepository::new(db);
        let dealer = repo.create_dealer(new_dealer("u-1", "Grip")).await.unwrap();

        let expires = Utc::now() + Duration::days(30);
        repo.update_dealer_subscription(&dealer.id, "premium", expires)
            .await
            .unwrap();

        let updated = repo.get_dealer(&dealer.id).await.unwrap().unwrap();
        assert_eq!(updated.subscription_type, "premium");
        assert!(updated.subscription_expires_at.is_some());
        assert!(updated.subscription_active_at(Utc::now()));

        let missing = repo.update_dealer_subscription("nope", "premium", expires).await;
        assert!(matches!(missing, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn lists_all_dealers() {
        let db = test_db().await;
        insert_user(&db, "u-1", UserRole::Dealer, true).await;
        insert_user(&db, "u-2", UserRole::Dealer, true).await;
        let repo = SeaOrmDealerRepository::new(db);
        repo.create_dealer(new_dealer("u-2", "Zed Wheels")).await.unwrap();
        repo.create_dealer(new_dealer("u-1", "Alpha Tyres")).await.unwrap();

        let names: Vec<_> = repo
            .get_all_dealers()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.business_name)
            .collect();
        assert_eq!(names, vec!["Alpha Tyres", "Zed Wheels"]);
    }
}
