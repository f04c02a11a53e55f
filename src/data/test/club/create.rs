use super::*;

/// Tests creating a club with a display name.
///
/// Expected: Ok with the club created
#[tokio::test]
async fn creates_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    let club = repo.create("Chess Club".to_string()).await?;

    assert_eq!(club.name, "Chess Club");
    assert!(club.club_id > 0);

    Ok(())
}

/// Tests that club names are unique.
///
/// Expected: Err on the duplicate insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    repo.create("Chess Club".to_string()).await?;

    let duplicate = repo.create("Chess Club".to_string()).await;
    assert!(duplicate.is_err());

    Ok(())
}
