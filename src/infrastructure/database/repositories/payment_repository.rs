//! SeaORM implementation of PaymentRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::new_id;
use crate::domain::{
    DomainError, DomainResult, NewPayment, Payment, PaymentRepository, PaymentStatus,
};
use crate::infrastructure::database::entities::payment;
use crate::shared::{from_minor_units, to_minor_units};

fn entity_to_domain(p: payment::Model) -> DomainResult<Payment> {
    let status = p
        .status
        .parse::<PaymentStatus>()
        .map_err(|_| DomainError::Storage(format!("Unknown payment status: {}", p.status)))?;
    Ok(Payment {
        id: p.id,
        user_id: p.user_id,
        booking_id: p.booking_id,
        amount: from_minor_units(p.amount_minor),
        currency: p.currency,
        status,
        external_payment_id: p.external_payment_id,
        created_at: p.created_at,
    })
}

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn create_payment(&self, p: NewPayment) -> DomainResult<Payment> {
        let model = payment::ActiveModel {
            id: Set(new_id()),
            user_id: Set(p.user_id),
            booking_id: Set(p.booking_id),
            amount_minor: Set(to_minor_units(p.amount)?),
            currency: Set(p.currency.to_uppercase()),
            status: Set(PaymentStatus::Pending.as_str().to_string()),
            external_payment_id: Set(None),
            created_at: Set(Utc::now()),
        };
        let created = model.insert(&self.db).await?;

        info!(
            "Payment {} created for {}: {} minor units {}",
            created.id, created.user_id, created.amount_minor, created.currency
        );
        entity_to_domain(created)
    }

    async fn get_payments_by_user_id(&self, user_id: &str) -> DomainResult<Vec<Payment>> {
        payment::Entity::find()
            .filter(payment::Column::UserId.eq(user_id))
            .order_by_desc(payment::Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(entity_to_domain)
            .collect()
    }

    async fn update_payment_status(
        &self,
        id: &str,
        status: PaymentStatus,
        external_payment_id: Option<&str>,
    ) -> DomainResult<()> {
        let existing = payment::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Payment", "id", id))?;

        let mut active: payment::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        if let Some(reference) = external_payment_id {
            active.external_payment_id = Set(Some(reference.to_string()));
        }
        active.update(&self.db).await?;

        info!("Payment {} -> {}", id, status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::user::UserRole;
    use crate::infrastructure::database::test_support::{insert_user, test_db};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn new_payment(user_id: &str, amount: &str) -> NewPayment {
        NewPayment {
            user_id: user_id.to_string(),
            booking_id: None,
            amount: Decimal::from_str(amount).unwrap(),
            currency: "inr".to_string(),
        }
    }

    #[tokio::test]
    async fn payments_start_pending_and_list_per_user() {
        let db = test_db().await;
        insert_user(&db, "u-1", UserRole::Customer, true).await;
        insert_user(&db, "u-2", UserRole::Customer, true).await;
        let repo = SeaOrmPaymentRepository::new(db);

        let created = repo.create_payment(new_payment("u-1", "1200.00")).await.unwrap();
        repo.create_payment(new_payment("u-2", "10")).await.unwrap();

        assert_eq!(created.status, PaymentStatus::Pending);
        assert_eq!(created.currency, "INR");
        assert_eq!(created.amount, Decimal::from_str("1200").unwrap());

        let mine = repo.get_payments_by_user_id("u-1").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, created.id);
    }

    #[tokio::test]
    async fn status_update_records_gateway_reference() {
        let db = test_db().await;
        insert_user(&db, "u-1", UserRole::Customer, true).await;
        let repo = SeaOrmPaymentRepository::new(db);
        let payment = repo.create_payment(new_payment("u-1", "99.90")).await.unwrap();

        repo.update_payment_status(&payment.id, PaymentStatus::Completed, Some("pay_Abc123"))
            .await
            .unwrap();
        repo.update_payment_status(&payment.id, PaymentStatus::Refunded, None)
            .await
            .unwrap();

        let loaded = repo.get_payments_by_user_id("u-1").await.unwrap().remove(0);
        assert_eq!(loaded.status, PaymentStatus::Refunded);
        assert_eq!(loaded.external_payment_id.as_deref(), Some("pay_Abc123"));

        assert!(matches!(
            repo.update_payment_status("nope", PaymentStatus::Failed, None).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
