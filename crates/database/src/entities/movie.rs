use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Id of the seeded placeholder movie that orphaned reservations fall back to
pub const UNKNOWN_MOVIE_ID: Uuid = Uuid::nil();

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hall: String,
    pub title: String,
    pub description: Option<String>,
    /// Duration in minutes
    pub duration: i32,
    pub start_time: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
