//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::new_id;
use crate::domain::{
    Booking, BookingRepository, BookingStatus, DomainError, DomainResult, NewBooking,
};
use crate::infrastructure::database::entities::booking;
use crate::shared::{from_minor_units, to_minor_units};

fn entity_to_domain(b: booking::Model) -> DomainResult<Booking> {
    Ok(Booking {
        status: b.status.parse::<BookingStatus>().map_err(|_| {
            warn!("Booking {} has unknown status '{}'", b.id, b.status);
            DomainError::Storage(format!("Unknown booking status: {}", b.status))
        })?,
        id: b.id,
        customer_id: b.customer_id,
        driver_id: b.driver_id,
        tyre_id: b.tyre_id,
        pickup_address: b.pickup_address,
        dropoff_address: b.dropoff_address,
        fare: b.fare_minor.map(from_minor_units),
        created_at: b.created_at,
        completed_at: b.completed_at,
    })
}

fn all_to_domain(models: Vec<booking::Model>) -> DomainResult<Vec<Booking>> {
    models.into_iter().map(entity_to_domain).collect()
}

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: &str) -> DomainResult<booking::Model> {
        booking::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", "id", id))
    }
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create_booking(&self, b: NewBooking) -> DomainResult<Booking> {
        let model = booking::ActiveModel {
            id: Set(new_id()),
            customer_id: Set(b.customer_id),
            driver_id: Set(None),
            tyre_id: Set(b.tyre_id),
            pickup_address: Set(b.pickup_address),
            dropoff_address: Set(b.dropoff_address),
            status: Set(BookingStatus::Pending.as_str().to_string()),
            fare_minor: Set(None),
            created_at: Set(Utc::now()),
            completed_at: Set(None),
        };
        let created = model.insert(&self.db).await?;

        info!("Booking {} created by {}", created.id, created.customer_id);
        entity_to_domain(created)
    }

    async fn get_booking(&self, id: &str) -> DomainResult<Option<Booking>> {
        booking::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(entity_to_domain)
            .transpose()
    }

    async fn get_bookings_by_customer_id(&self, customer_id: &str) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::CustomerId.eq(customer_id))
            .order_by_desc(booking::Column::CreatedAt)
            .all(&self.db)
            .await?;
        all_to_domain(models)
    }

    async fn get_bookings_by_driver_id(&self, driver_id: &str) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::DriverId.eq(driver_id))
            .order_by_desc(booking::Column::CreatedAt)
            .all(&self.db)
            .await?;
        all_to_domain(models)
    }

    async fn get_pending_bookings(&self) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::Status.eq(BookingStatus::Pending.as_str()))
            .order_by_asc(booking::Column::CreatedAt)
            .all(&self.db)
            .await?;
        all_to_domain(models)
    }

    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
        driver_id: Option<&str>,
    ) -> DomainResult<()> {
        let existing = self.find_model(id).await?;

        let mut active: booking::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        // Absent driver leaves the current assignment untouched
        if let Some(driver_id) = driver_id {
            active.driver_id = Set(Some(driver_id.to_string()));
        }
        active.update(&self.db).await?;

        info!("Booking {} -> {}", id, status);
        Ok(())
    }

    async fn complete_booking(&self, id: &str, fare: Decimal) -> DomainResult<()> {
        let fare_minor = to_minor_units(fare)?;
        let existing = self.find_model(id).await?;

        let mut active: booking::ActiveModel = existing.into();
        active.status = Set(BookingStatus::Completed.as_str().to_string());
        active.fare_minor = Set(Some(fare_minor));
        active.completed_at = Set(Some(Utc::now()));
        active.update(&self.db).await?;

        info!("Booking {} completed, fare {}", id, fare);
        Ok(())
    }

    async fn get_all_bookings(&self) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .order_by_desc(booking::Column::CreatedAt)
            .all(&self.db)
            .await?;
        all_to_domain(models)
    }
}
