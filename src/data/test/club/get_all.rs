use super::*;

/// Tests that clubs come back ordered by name ascending regardless of
/// insertion order.
///
/// Expected: Ok with name-sorted clubs
#[tokio::test]
async fn orders_clubs_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::club::create_named_club(db, "Robotics").await?;
    factory::club::create_named_club(db, "Art Society").await?;
    factory::club::create_named_club(db, "Chess Club").await?;

    let repo = ClubRepository::new(db);
    let clubs = repo.get_all().await?;

    let names: Vec<&str> = clubs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Art Society", "Chess Club", "Robotics"]);

    Ok(())
}

/// Tests counting clubs on an empty and a populated table.
///
/// Expected: 0, then the number created
#[tokio::test]
async fn counts_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::club::create_club(db).await?;
    factory::club::create_club(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
