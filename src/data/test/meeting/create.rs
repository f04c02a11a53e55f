use super::*;

/// Tests creating a meeting with full field values.
///
/// Expected: Ok with the meeting created and all fields persisted
#[tokio::test]
async fn creates_meeting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room) = factory::helpers::create_meeting_dependencies(db).await?;

    let repo = MeetingRepository::new(db);
    let meeting = repo
        .create(CreateMeetingParams {
            date: date(2026, 11, 10),
            start_time: time(12, 0),
            duration_minutes: 60,
            description: Some("Weekly meetup".to_string()),
            club_id: club.club_id,
            room_id: room.room_id,
            invited_count: 20,
            accepted_count: 12,
        })
        .await?;

    assert_eq!(meeting.date, date(2026, 11, 10));
    assert_eq!(meeting.start_time, time(12, 0));
    assert_eq!(meeting.duration_minutes, 60);
    assert_eq!(meeting.description, Some("Weekly meetup".to_string()));
    assert_eq!(meeting.club_id, club.club_id);
    assert_eq!(meeting.room_id, room.room_id);
    assert_eq!(meeting.invited_count, 20);
    assert_eq!(meeting.accepted_count, 12);

    Ok(())
}

/// Tests creating a meeting without a description.
///
/// Expected: Ok with None description
#[tokio::test]
async fn creates_meeting_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room) = factory::helpers::create_meeting_dependencies(db).await?;

    let repo = MeetingRepository::new(db);
    let meeting = repo
        .create(CreateMeetingParams {
            date: date(2026, 11, 10),
            start_time: time(12, 0),
            duration_minutes: 30,
            description: None,
            club_id: club.club_id,
            room_id: room.room_id,
            invited_count: 0,
            accepted_count: 0,
        })
        .await?;

    assert_eq!(meeting.description, None);

    Ok(())
}

/// Tests that the store enforces referential integrity: a meeting whose
/// club id has no matching row is rejected at commit time.
///
/// Expected: Err on insert
#[tokio::test]
async fn rejects_unknown_club_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = MeetingRepository::new(db);
    let result = repo
        .create(CreateMeetingParams {
            date: date(2026, 11, 10),
            start_time: time(12, 0),
            duration_minutes: 60,
            description: None,
            club_id: 999,
            room_id: room.room_id,
            invited_count: 0,
            accepted_count: 0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that accepted_count may exceed invited_count; nothing caps it.
///
/// Expected: Ok with accepted greater than invited
#[tokio::test]
async fn allows_accepted_above_invited() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room) = factory::helpers::create_meeting_dependencies(db).await?;

    let repo = MeetingRepository::new(db);
    let meeting = repo
        .create(CreateMeetingParams {
            date: date(2026, 11, 10),
            start_time: time(12, 0),
            duration_minutes: 60,
            description: None,
            club_id: club.club_id,
            room_id: room.room_id,
            invited_count: 5,
            accepted_count: 9,
        })
        .await?;

    assert_eq!(meeting.invited_count, 5);
    assert_eq!(meeting.accepted_count, 9);

    Ok(())
}
