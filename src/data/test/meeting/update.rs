use super::*;

/// Tests that update overwrites every mutable field in place.
///
/// Expected: Ok with all fields replaced and the id unchanged
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_club, _room, meeting) = factory::helpers::create_meeting_with_dependencies(db).await?;
    let other_club = factory::club::create_club(db).await?;
    let other_room = factory::room::create_room(db).await?;

    let repo = MeetingRepository::new(db);
    let updated = repo
        .update(
            meeting.meeting_id,
            UpdateMeetingParams {
                date: date(2026, 12, 1),
                start_time: time(15, 30),
                duration_minutes: 90,
                description: Some("Planning session".to_string()),
                club_id: other_club.club_id,
                room_id: other_room.room_id,
                invited_count: 35,
                accepted_count: 22,
            },
        )
        .await?;

    assert_eq!(updated.meeting_id, meeting.meeting_id);
    assert_eq!(updated.date, date(2026, 12, 1));
    assert_eq!(updated.start_time, time(15, 30));
    assert_eq!(updated.duration_minutes, 90);
    assert_eq!(updated.description, Some("Planning session".to_string()));
    assert_eq!(updated.club_id, other_club.club_id);
    assert_eq!(updated.room_id, other_room.room_id);
    assert_eq!(updated.invited_count, 35);
    assert_eq!(updated.accepted_count, 22);

    Ok(())
}

/// Tests that update can clear the optional description.
///
/// Expected: Ok with None description persisted
#[tokio::test]
async fn clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room, meeting) = factory::helpers::create_meeting_with_dependencies(db).await?;
    assert!(meeting.description.is_some());

    let repo = MeetingRepository::new(db);
    let updated = repo
        .update(
            meeting.meeting_id,
            UpdateMeetingParams {
                date: meeting.date,
                start_time: meeting.start_time,
                duration_minutes: meeting.duration_minutes,
                description: None,
                club_id: club.club_id,
                room_id: room.room_id,
                invited_count: meeting.invited_count,
                accepted_count: meeting.accepted_count,
            },
        )
        .await?;

    assert_eq!(updated.description, None);

    Ok(())
}

/// Tests updating a meeting that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room) = factory::helpers::create_meeting_dependencies(db).await?;

    let repo = MeetingRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateMeetingParams {
                date: date(2026, 11, 10),
                start_time: time(12, 0),
                duration_minutes: 60,
                description: None,
                club_id: club.club_id,
                room_id: room.room_id,
                invited_count: 0,
                accepted_count: 0,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
