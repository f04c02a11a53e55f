use super::*;

/// Tests deleting an existing meeting.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_meeting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_club, _room, meeting) = factory::helpers::create_meeting_with_dependencies(db).await?;

    let repo = MeetingRepository::new(db);
    let deleted = repo.delete(meeting.meeting_id).await?;

    assert!(deleted);
    assert_eq!(repo.get_by_id(meeting.meeting_id).await?, None);

    Ok(())
}

/// Tests that deleting the same meeting twice reports absence the second time.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_club, _room, meeting) = factory::helpers::create_meeting_with_dependencies(db).await?;

    let repo = MeetingRepository::new(db);

    assert!(repo.delete(meeting.meeting_id).await?);
    assert!(!repo.delete(meeting.meeting_id).await?);

    Ok(())
}

/// Tests that deleting one meeting leaves the others untouched.
///
/// Expected: only the targeted row is removed
#[tokio::test]
async fn leaves_other_meetings_intact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room) = factory::helpers::create_meeting_dependencies(db).await?;
    let first = factory::meeting::create_meeting(db, club.club_id, room.room_id).await?;
    let second = factory::meeting::create_meeting(db, club.club_id, room.room_id).await?;

    let repo = MeetingRepository::new(db);
    repo.delete(first.meeting_id).await?;

    assert_eq!(repo.count().await?, 1);
    assert!(repo.get_by_id(second.meeting_id).await?.is_some());

    Ok(())
}
