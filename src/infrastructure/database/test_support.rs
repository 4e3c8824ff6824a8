//! In-memory database fixtures for repository and handler tests

use chrono::Utc;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

use super::entities::{booking, dealer, user};
use super::migrator::Migrator;

/// Fresh in-memory SQLite database with every migration applied
pub async fn test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn insert_user(
    db: &DatabaseConnection,
    id: &str,
    role: user::UserRole,
    is_approved: bool,
) -> user::Model {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(id.to_string()),
        email: Set(Some(format!("{}@example.com", id))),
        first_name: Set(None),
        last_name: Set(None),
        profile_image_url: Set(None),
        role: Set(role),
        is_approved: Set(is_approved),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_dealer(db: &DatabaseConnection, id: &str, user_id: &str) -> dealer::Model {
    dealer::ActiveModel {
        id: Set(id.to_string()),
        user_id: Set(user_id.to_string()),
        business_name: Set(format!("{} Tyres", id)),
        address: Set("1 Market Street".to_string()),
        phone: Set(None),
        subscription_type: Set("basic".to_string()),
        subscription_expires_at: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_booking(
    db: &DatabaseConnection,
    id: &str,
    customer_id: &str,
    status: &str,
    driver_id: Option<&str>,
) -> booking::Model {
    booking::ActiveModel {
        id: Set(id.to_string()),
        customer_id: Set(customer_id.to_string()),
        driver_id: Set(driver_id.map(String::from)),
        tyre_id: Set(None),
        pickup_address: Set("Depot 4".to_string()),
        dropoff_address: Set("22 Lake View".to_string()),
        status: Set(status.to_string()),
        fare_minor: Set(None),
        created_at: Set(Utc::now()),
        completed_at: Set(None),
    }
    .insert(db)
    .await
    .unwrap()
}
