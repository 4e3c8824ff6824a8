use async_trait::async_trait;

use super::{NewUser, UpsertUser, User, UserRole};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self, id: &str) -> DomainResult<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn create_user(&self, user: NewUser) -> DomainResult<User>;
    async fn upsert_user(&self, user: UpsertUser) -> DomainResult<User>;

    async fn update_user_approval(&self, id: &str, is_approved: bool) -> DomainResult<()>;
    async fn update_user_role(&self, id: &str, role: UserRole) -> DomainResult<()>;
    async fn get_users_by_role(&self, role: UserRole) -> DomainResult<Vec<User>>;
}
