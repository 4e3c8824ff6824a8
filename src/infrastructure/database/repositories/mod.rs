//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod booking_repository;
pub mod dealer_repository;
pub mod ev_station_repository;
pub mod feedback_repository;
pub mod payment_repository;
pub mod repository_provider;
pub mod tyre_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::shared::DomainError;

/// Map an insert/update failure, turning unique-constraint violations into
/// `Conflict`.
pub(crate) fn write_err(e: sea_orm::DbErr, conflict_message: &str) -> DomainError {
    let text = e.to_string();
    if text.contains("UNIQUE") || text.contains("duplicate") {
        DomainError::Conflict(conflict_message.to_string())
    } else {
        DomainError::from(e)
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
