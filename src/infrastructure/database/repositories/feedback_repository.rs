//! SeaORM implementation of FeedbackRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::new_id;
use crate::domain::{DomainResult, Feedback, FeedbackRepository, NewFeedback};
use crate::infrastructure::database::entities::feedback;

fn entity_to_domain(f: feedback::Model) -> Feedback {
    Feedback {
        id: f.id,
        booking_id: f.booking_id,
        customer_id: f.customer_id,
        rating: f.rating,
        comment: f.comment,
        created_at: f.created_at,
    }
}

pub struct SeaOrmFeedbackRepository {
    db: DatabaseConnection,
}

impl SeaOrmFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeedbackRepository for SeaOrmFeedbackRepository {
    async fn create_feedback(&self, f: NewFeedback) -> DomainResult<Feedback> {
        let model = feedback::ActiveModel {
            id: Set(new_id()),
            booking_id: Set(f.booking_id),
            customer_id: Set(f.customer_id),
            rating: Set(f.rating),
            comment: Set(f.comment),
            created_at: Set(Utc::now()),
        };
        let created = model.insert(&self.db).await?;

        info!("Booking {} rated {}", created.booking_id, created.rating);
        Ok(entity_to_domain(created))
    }

    /// Earliest feedback left for the booking
    async fn get_feedback_by_booking_id(&self, booking_id: &str) -> DomainResult<Option<Feedback>> {
        let model = feedback::Entity::find()
            .filter(feedback::Column::BookingId.eq(booking_id))
            .order_by_asc(feedback::Column::CreatedAt)
            .one(&self.db)
            .await?;
        Ok(model.map(entity_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::user::UserRole;
    use crate::infrastructure::database::test_support::{insert_booking, insert_user, test_db};

    #[tokio::test]
    async fn feedback_is_found_by_booking() {
        let db = test_db().await;
        insert_user(&db, "cust-1", UserRole::Customer, true).await;
        insert_booking(&db, "b-1", "cust-1", "completed", None).await;
        insert_booking(&db, "b-2", "cust-1", "completed", None).await;
        let repo = SeaOrmFeedbackRepository::new(db);

        let created = repo
            .create_feedback(NewFeedback {
                booking_id: "b-1".into(),
                customer_id: "cust-1".into(),
                rating: 4,
                comment: Some("Quick fitting".into()),
            })
            .await
            .unwrap();

        let found = repo.get_feedback_by_booking_id("b-1").await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(repo.get_feedback_by_booking_id("b-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn feedback_for_unknown_booking_is_rejected() {
        let repo = SeaOrmFeedbackRepository::new(test_db().await);
        let result = repo
            .create_feedback(NewFeedback {
                booking_id: "ghost".into(),
                customer_id: "cust-1".into(),
                rating: 5,
                comment: None,
            })
            .await;
        assert!(result.is_err());
    }
}
