//! Business logic orchestration between controllers and the data layer.

pub mod meeting;
pub mod report;

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::{club::ClubRepository, room::RoomRepository},
    model::meeting::MeetingDto,
};

/// Loads lookup maps from club/room ids to their display names.
///
/// Used when enriching meeting rows for the list and report views. Two small
/// reads instead of a join keep the repositories single-entity.
pub(crate) async fn reference_name_maps(
    db: &DatabaseConnection,
) -> Result<(HashMap<i32, String>, HashMap<i32, String>), DbErr> {
    let clubs = ClubRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|c| (c.club_id, c.name))
        .collect();

    let rooms = RoomRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|r| (r.room_id, format!("{} {}", r.building, r.number)))
        .collect();

    Ok((clubs, rooms))
}

/// Builds a display DTO for a meeting row using the reference name maps.
pub(crate) fn to_meeting_dto(
    meeting: entity::meeting::Model,
    club_names: &HashMap<i32, String>,
    room_names: &HashMap<i32, String>,
) -> MeetingDto {
    MeetingDto {
        meeting_id: meeting.meeting_id,
        date: meeting.date,
        start_time: meeting.start_time,
        duration_minutes: meeting.duration_minutes,
        description: meeting.description,
        club_id: meeting.club_id,
        club_name: club_names
            .get(&meeting.club_id)
            .cloned()
            .unwrap_or_else(|| format!("#{}", meeting.club_id)),
        room_id: meeting.room_id,
        room_name: room_names
            .get(&meeting.room_id)
            .cloned()
            .unwrap_or_else(|| format!("#{}", meeting.room_id)),
        invited_count: meeting.invited_count,
        accepted_count: meeting.accepted_count,
    }
}
