//! SeaORM-backed RepositoryProvider

use sea_orm::DatabaseConnection;

use super::booking_repository::SeaOrmBookingRepository;
use super::dealer_repository::SeaOrmDealerRepository;
use super::ev_station_repository::SeaOrmEvStationRepository;
use super::feedback_repository::SeaOrmFeedbackRepository;
use super::payment_repository::SeaOrmPaymentRepository;
use super::tyre_repository::SeaOrmTyreRepository;
use super::user_repository::SeaOrmUserRepository;
use crate::domain::{
    BookingRepository, DealerRepository, EvStationRepository, FeedbackRepository,
    PaymentRepository, RepositoryProvider, TyreRepository, UserRepository,
};

/// Every repository over one shared connection pool
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    users: SeaOrmUserRepository,
    dealers: SeaOrmDealerRepository,
    tyres: SeaOrmTyreRepository,
    bookings: SeaOrmBookingRepository,
    payments: SeaOrmPaymentRepository,
    feedback: SeaOrmFeedbackRepository,
    ev_stations: SeaOrmEvStationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            dealers: SeaOrmDealerRepository::new(db.clone()),
            tyres: SeaOrmTyreRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db.clone()),
            feedback: SeaOrmFeedbackRepository::new(db.clone()),
            ev_stations: SeaOrmEvStationRepository::new(db.clone()),
            db,
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn dealers(&self) -> &dyn DealerRepository {
        &self.dealers
    }

    fn tyres(&self) -> &dyn TyreRepository {
        &self.tyres
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }

    fn feedback(&self) -> &dyn FeedbackRepository {
        &self.feedback
    }

    fn ev_stations(&self) -> &dyn EvStationRepository {
        &self.ev_stations
    }
}
