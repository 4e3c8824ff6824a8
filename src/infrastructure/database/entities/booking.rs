//! Booking entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub customer_id: String,

    /// Set when a driver accepts the booking
    #[sea_orm(nullable)]
    pub driver_id: Option<String>,

    #[sea_orm(nullable)]
    pub tyre_id: Option<String>,

    pub pickup_address: String,

    pub dropoff_address: String,

    /// pending, assigned, in_progress, completed, cancelled
    pub status: String,

    /// Final fare in minor currency units
    #[sea_orm(nullable)]
    pub fare_minor: Option<i64>,

    pub created_at: DateTimeUtc,

    #[sea_orm(nullable)]
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CustomerId",
        to = "super::user::Column::Id"
    )]
    Customer,
    #[sea_orm(has_many = "super::feedback::Entity")]
    Feedback,
}

impl Related<super::feedback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedback.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
