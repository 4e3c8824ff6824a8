//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users;
mod m20240601_000002_create_dealers;
mod m20240601_000003_create_tyres;
mod m20240601_000004_create_bookings;
mod m20240601_000005_create_payments;
mod m20240601_000006_create_feedback;
mod m20240601_000007_create_ev_stations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users::Migration),
            Box::new(m20240601_000002_create_dealers::Migration),
            Box::new(m20240601_000003_create_tyres::Migration),
            Box::new(m20240601_000004_create_bookings::Migration),
            Box::new(m20240601_000005_create_payments::Migration),
            Box::new(m20240601_000006_create_feedback::Migration),
            Box::new(m20240601_000007_create_ev_stations::Migration),
        ]
    }
}
