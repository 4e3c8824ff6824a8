use async_trait::async_trait;

use super::model::{NewPayment, Payment, PaymentStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create_payment(&self, payment: NewPayment) -> DomainResult<Payment>;
    async fn get_payments_by_user_id(&self, user_id: &str) -> DomainResult<Vec<Payment>>;

    /// Set the status; the gateway reference is written only when supplied.
    async fn update_payment_status(
        &self,
        id: &str,
        status: PaymentStatus,
        external_payment_id: Option<&str>,
    ) -> DomainResult<()>;
}
