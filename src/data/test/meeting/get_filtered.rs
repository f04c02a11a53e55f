use super::*;

/// Tests that an empty filter matches everything, oldest first.
///
/// Expected: Ok with (date asc, start_time asc) ordering
#[tokio::test]
async fn empty_filter_matches_all_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room) = factory::helpers::create_meeting_dependencies(db).await?;

    MeetingFactory::new(db, club.club_id, room.room_id)
        .date(date(2026, 11, 12))
        .build()
        .await?;
    MeetingFactory::new(db, club.club_id, room.room_id)
        .date(date(2026, 11, 10))
        .build()
        .await?;

    let repo = MeetingRepository::new(db);
    let meetings = repo.get_filtered(&MeetingFilter::default()).await?;

    let dates: Vec<NaiveDate> = meetings.iter().map(|m| m.date).collect();
    assert_eq!(dates, vec![date(2026, 11, 10), date(2026, 11, 12)]);

    Ok(())
}

/// Tests filtering by club and room ids.
///
/// Expected: Ok with only the matching rows
#[tokio::test]
async fn filters_by_club_and_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club_a, room_a) = factory::helpers::create_meeting_dependencies(db).await?;
    let club_b = factory::club::create_club(db).await?;
    let room_b = factory::room::create_room(db).await?;

    factory::meeting::create_meeting(db, club_a.club_id, room_a.room_id).await?;
    factory::meeting::create_meeting(db, club_a.club_id, room_b.room_id).await?;
    factory::meeting::create_meeting(db, club_b.club_id, room_b.room_id).await?;

    let repo = MeetingRepository::new(db);

    let by_club = repo
        .get_filtered(&MeetingFilter {
            club_id: Some(club_a.club_id),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_club.len(), 2);
    assert!(by_club.iter().all(|m| m.club_id == club_a.club_id));

    let by_both = repo
        .get_filtered(&MeetingFilter {
            club_id: Some(club_a.club_id),
            room_id: Some(room_b.room_id),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].room_id, room_b.room_id);

    Ok(())
}

/// Tests that the date range bounds are inclusive on both ends.
///
/// Expected: rows dated exactly on the bounds are included
#[tokio::test]
async fn date_range_bounds_are_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room) = factory::helpers::create_meeting_dependencies(db).await?;

    for day in [9, 10, 11, 12, 13] {
        MeetingFactory::new(db, club.club_id, room.room_id)
            .date(date(2026, 11, day))
            .build()
            .await?;
    }

    let repo = MeetingRepository::new(db);
    let meetings = repo
        .get_filtered(&MeetingFilter {
            date_from: Some(date(2026, 11, 10)),
            date_to: Some(date(2026, 11, 12)),
            ..Default::default()
        })
        .await?;

    let dates: Vec<NaiveDate> = meetings.iter().map(|m| m.date).collect();
    assert_eq!(
        dates,
        vec![date(2026, 11, 10), date(2026, 11, 11), date(2026, 11, 12)]
    );

    Ok(())
}

/// Tests a half-open usage: only date_from set.
///
/// Expected: everything on or after the bound
#[tokio::test]
async fn date_from_alone_filters_lower_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, room) = factory::helpers::create_meeting_dependencies(db).await?;

    MeetingFactory::new(db, club.club_id, room.room_id)
        .date(date(2026, 11, 9))
        .build()
        .await?;
    MeetingFactory::new(db, club.club_id, room.room_id)
        .date(date(2026, 11, 10))
        .build()
        .await?;

    let repo = MeetingRepository::new(db);
    let meetings = repo
        .get_filtered(&MeetingFilter {
            date_from: Some(date(2026, 11, 10)),
            ..Default::default()
        })
        .await?;

    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].date, date(2026, 11, 10));

    Ok(())
}
