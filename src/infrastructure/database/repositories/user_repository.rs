//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::write_err;
use crate::domain::{DomainError, DomainResult, NewUser, UpsertUser, User, UserRepository, UserRole};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: &str) -> DomainResult<user::Model> {
        user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "id", id))
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Customer => UserRole::Customer,
        user::UserRole::Driver => UserRole::Driver,
        user::UserRole::Dealer => UserRole::Dealer,
        user::UserRole::EvStation => UserRole::EvStation,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Customer => user::UserRole::Customer,
        UserRole::Driver => user::UserRole::Driver,
        UserRole::Dealer => user::UserRole::Dealer,
        UserRole::EvStation => user::UserRole::EvStation,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        profile_image_url: model.profile_image_url,
        role: entity_role_to_domain(model.role),
        is_approved: model.is_approved,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn new_user_active_model(user: NewUser) -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(user.id),
        email: Set(user.email),
        first_name: Set(user.first_name),
        last_name: Set(user.last_name),
        profile_image_url: Set(user.profile_image_url),
        role: Set(domain_role_to_entity(user.role)),
        is_approved: Set(user.is_approved),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn get_user(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn create_user(&self, new_user: NewUser) -> DomainResult<User> {
        let created = new_user_active_model(new_user)
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, "User id or email already exists"))?;

        info!("User created: {} ({})", created.id, entity_role_to_domain(created.role));
        Ok(user_model_to_domain(created))
    }

    async fn upsert_user(&self, data: UpsertUser) -> DomainResult<User> {
        let id = data.id.clone();

        // Only profile columns are refreshed on conflict; role and approval
        // belong to the marketplace, not the identity provider.
        user::Entity::insert(new_user_active_model(data.into()))
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .update_columns([
                        user::Column::Email,
                        user::Column::FirstName,
                        user::Column::LastName,
                        user::Column::ProfileImageUrl,
                        user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| write_err(e, "Email already belongs to another user"))?;

        self.find_model(&id).await.map(user_model_to_domain)
    }

    async fn update_user_approval(&self, id: &str, is_approved: bool) -> DomainResult<()> {
        let mut active: user::ActiveModel = self.find_model(id).await?.into();
        active.is_approved = Set(is_approved);
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await?;

        info!("User {} approval set to {}", id, is_approved);
        Ok(())
    }

    async fn update_user_role(&self, id: &str, role: UserRole) -> DomainResult<()> {
        let mut active: user::ActiveModel = self.find_model(id).await?.into();
        active.role = Set(domain_role_to_entity(role));
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await?;

        info!("User {} role set to {}", id, role);
        Ok(())
    }

    async fn get_users_by_role(&self, role: UserRole) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .filter(user::Column::Role.eq(domain_role_to_entity(role)))
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(user_model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_support::{insert_user, test_db};
    use sea_orm::PaginatorTrait;

    fn profile(id: &str, email: &str) -> UpsertUser {
        UpsertUser {
            id: id.to_string(),
            email: Some(email.to_string()),
            first_name: Some("Asha".to_string()),
            last_name: None,
            profile_image_url: None,
        }
    }

    #[tokio::test]
    async fn upsert_twice_updates_instead_of_duplicating() {
        let db = test_db().await;
        let repo = SeaOrmUserRepository::new(db.clone());

        let first = repo.upsert_user(profile("sub-1", "old@example.com")).await.unwrap();
        assert_eq!(first.role, UserRole::Customer);
        assert!(first.is_approved);

        let second = repo.upsert_user(profile("sub-1", "new@example.com")).await.unwrap();
        assert_eq!(second.id, "sub-1");
        assert_eq!(second.email.as_deref(), Some("new@example.com"));
        assert_eq!(second.created_at, first.created_at);

        let count = user::Entity::find().count(&db).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn upsert_keeps_role_and_approval() {
        let db = test_db().await;
        insert_user(&db, "sub-2", user::UserRole::Dealer, false).await;
        let repo = SeaOrmUserRepository::new(db);

        let user = repo.upsert_user(profile("sub-2", "dealer@example.com")).await.unwrap();
        assert_eq!(user.role, UserRole::Dealer);
        assert!(!user.is_approved);
        assert_eq!(user.first_name.as_deref(), Some("Asha"));
    }

    #[tokio::test]
    async fn get_missing_user_is_none() {
        let repo = SeaOrmUserRepository::new(test_db().await);
        assert!(repo.get_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lookup_by_email() {
        let db = test_db().await;
        insert_user(&db, "sub-3", user::UserRole::Customer, true).await;
        let repo = SeaOrmUserRepository::new(db);

        let found = repo.get_user_by_email("sub-3@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some("sub-3".to_string()));
        assert!(repo.get_user_by_email("x@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let db = test_db().await;
        insert_user(&db, "sub-4", user::UserRole::Customer, true).await;
        let repo = SeaOrmUserRepository::new(db);

        let result = repo
            .create_user(NewUser {
                id: "sub-5".into(),
                email: Some("sub-4@example.com".into()),
                first_name: None,
                last_name: None,
                profile_image_url: None,
                role: UserRole::Customer,
                is_approved: true,
            })
            .await;
        assert!(matches!(result, Err(DomainError::Conflict(_))));
    }

    #[tokio::test]
    async fn role_and_approval_are_independent() {
        let db = test_db().await;
        insert_user(&db, "sub-6", user::UserRole::Customer, true).await;
        let repo = SeaOrmUserRepository::new(db);

        repo.update_user_role("sub-6", UserRole::Driver).await.unwrap();
        let user = repo.get_user("sub-6").await.unwrap().unwrap();
        assert_eq!(user.role, UserRole::Driver);
        assert!(user.is_approved);

        repo.update_user_approval("sub-6", false).await.unwrap();
        let user = repo.get_user("sub-6").await.unwrap().unwrap();
        assert_eq!(user.role, UserRole::Driver);
        assert!(!user.is_approved);
    }

    #[tokio::test]
    async fn updating_missing_user_is_not_found() {
        let repo = SeaOrmUserRepository::new(test_db().await);
        let result = repo.update_user_role("ghost", UserRole::Dealer).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn filters_by_role() {
        let db = test_db().await;
        insert_user(&db, "c-1", user::UserRole::Customer, true).await;
        insert_user(&db, "d-1", user::UserRole::Driver, false).await;
        insert_user(&db, "d-2", user::UserRole::Driver, true).await;
        let repo = SeaOrmUserRepository::new(db);

        let drivers = repo.get_users_by_role(UserRole::Driver).await.unwrap();
        let mut ids: Vec<_> = drivers.into_iter().map(|u| u.id).collect();
        ids.sort();
        assert_eq!(ids, vec!["d-1", "d-2"]);
    }
}
