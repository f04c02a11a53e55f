use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_club_table::Club, m20260810_000002_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Meeting::Table)
                    .if_not_exists()
                    .col(pk_auto(Meeting::MeetingId))
                    .col(date(Meeting::Date))
                    .col(time(Meeting::StartTime))
                    .col(integer(Meeting::DurationMinutes))
                    .col(string_len_null(Meeting::Description, 255))
                    .col(integer(Meeting::ClubId))
                    .col(integer(Meeting::RoomId))
                    .col(integer(Meeting::InvitedCount).default(0))
                    .col(integer(Meeting::AcceptedCount).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_club_id")
                            .from(Meeting::Table, Meeting::ClubId)
                            .to(Club::Table, Club::ClubId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_room_id")
                            .from(Meeting::Table, Meeting::RoomId)
                            .to(Room::Table, Room::RoomId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Meeting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Meeting {
    #[sea_orm(iden = "meetings")]
    Table,
    MeetingId,
    Date,
    StartTime,
    DurationMinutes,
    Description,
    ClubId,
    RoomId,
    InvitedCount,
    AcceptedCount,
}
