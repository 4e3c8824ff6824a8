//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::booking::BookingRepository;
use super::dealer::DealerRepository;
use super::ev_station::EvStationRepository;
use super::feedback::FeedbackRepository;
use super::payment::PaymentRepository;
use super::tyre::TyreRepository;
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().get_user("sub-123").await?;
///     let pending = repos.bookings().get_pending_bookings().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn dealers(&self) -> &dyn DealerRepository;
    fn tyres(&self) -> &dyn TyreRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn feedback(&self) -> &dyn FeedbackRepository;
    fn ev_stations(&self) -> &dyn EvStationRepository;
}
