use super::*;

/// Tests that rooms come back ordered by building then number, both
/// ascending. Numbers are strings, so "099" sorts before "101".
///
/// Expected: Ok with (building, number)-sorted rooms
#[tokio::test]
async fn orders_rooms_by_building_then_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room_at(db, "Sci", "202").await?;
    factory::room::create_room_at(db, "Eng", "101").await?;
    factory::room::create_room_at(db, "Eng", "099").await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.get_all().await?;

    let labels: Vec<String> = rooms
        .iter()
        .map(|r| format!("{} {}", r.building, r.number))
        .collect();
    assert_eq!(labels, vec!["Eng 099", "Eng 101", "Sci 202"]);

    Ok(())
}

/// Tests that a non-numeric room label round-trips.
///
/// Expected: Ok with the label preserved
#[tokio::test]
async fn stores_non_numeric_room_labels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room_at(db, "Eng", "G-12B").await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.get_all().await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].number, "G-12B");

    Ok(())
}

/// Tests that max_capacity is optional.
///
/// Expected: Ok with None capacity stored
#[tokio::test]
async fn stores_room_without_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo
        .create("Eng".to_string(), "101".to_string(), None)
        .await?;

    assert_eq!(room.max_capacity, None);

    Ok(())
}
