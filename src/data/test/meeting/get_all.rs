use super::*;

/// Tests that the list query returns meetings newest first by date, with
/// start_time breaking ties, both descending.
///
/// Expected: Ok with (date desc, start_time desc) ordering
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room) = factory::helpers::create_meeting_dependencies(db).await?;

    MeetingFactory::new(db, club.club_id, room.room_id)
        .date(date(2026, 11, 10))
        .start_time(time(9, 0))
        .build()
        .await?;
    MeetingFactory::new(db, club.club_id, room.room_id)
        .date(date(2026, 11, 12))
        .start_time(time(15, 30))
        .build()
        .await?;
    MeetingFactory::new(db, club.club_id, room.room_id)
        .date(date(2026, 11, 12))
        .start_time(time(9, 0))
        .build()
        .await?;

    let repo = MeetingRepository::new(db);
    let meetings = repo.get_all().await?;

    let order: Vec<(NaiveDate, NaiveTime)> =
        meetings.iter().map(|m| (m.date, m.start_time)).collect();
    assert_eq!(
        order,
        vec![
            (date(2026, 11, 12), time(15, 30)),
            (date(2026, 11, 12), time(9, 0)),
            (date(2026, 11, 10), time(9, 0)),
        ]
    );

    Ok(())
}

/// Tests the list query on an empty table.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn returns_empty_when_no_meetings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MeetingRepository::new(db);
    let meetings = repo.get_all().await?;

    assert!(meetings.is_empty());

    Ok(())
}
