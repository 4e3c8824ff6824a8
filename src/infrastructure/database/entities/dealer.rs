//! Dealer entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dealers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Owning user (one dealer per user)
    #[sea_orm(unique)]
    pub user_id: String,

    pub business_name: String,

    pub address: String,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    /// Plan name, e.g. "basic", "premium"
    pub subscription_type: String,

    #[sea_orm(nullable)]
    pub subscription_expires_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::tyre::Entity")]
    Tyres,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::tyre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tyres.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
