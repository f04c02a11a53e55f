use sea_orm::entity::prelude::*;

/// A scheduled meeting linking one club and one room at a date/time.
///
/// `invited_count` and `accepted_count` are clamped to be non-negative at
/// input parsing; the schema itself does not enforce non-negativity, and
/// nothing caps accepted at invited.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meetings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub meeting_id: i32,
    pub date: Date,
    pub start_time: Time,
    pub duration_minutes: i32,
    pub description: Option<String>,
    pub club_id: i32,
    pub room_id: i32,
    pub invited_count: i32,
    pub accepted_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::ClubId",
        to = "super::club::Column::ClubId"
    )]
    Club,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::RoomId"
    )]
    Room,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
