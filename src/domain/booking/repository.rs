use async_trait::async_trait;
use rust_decimal::Decimal;

use super::model::{Booking, BookingStatus, NewBooking};
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_booking(&self, booking: NewBooking) -> DomainResult<Booking>;
    async fn get_booking(&self, id: &str) -> DomainResult<Option<Booking>>;
    async fn get_bookings_by_customer_id(&self, customer_id: &str) -> DomainResult<Vec<Booking>>;
    async fn get_bookings_by_driver_id(&self, driver_id: &str) -> DomainResult<Vec<Booking>>;
    async fn get_pending_bookings(&self) -> DomainResult<Vec<Booking>>;

    /// Set the status; `driver_id` is written only when supplied.
    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
        driver_id: Option<&str>,
    ) -> DomainResult<()>;

    /// Mark completed with the final fare and stamp `completed_at`.
    async fn complete_booking(&self, id: &str, fare: Decimal) -> DomainResult<()>;
    async fn get_all_bookings(&self) -> DomainResult<Vec<Booking>>;
}
