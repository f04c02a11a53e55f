use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

/// Repository providing read and seed operations for rooms.
///
/// Rooms are created by startup seeding only; no route mutates them.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all rooms ordered by building then number, both ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All rooms, (building, number)-sorted
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Building)
            .order_by_asc(entity::room::Column::Number)
            .all(self.db)
            .await
    }

    /// Counts all rooms.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of rooms
    /// - `Err(DbErr)`: Database error
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Room::find().count(self.db).await
    }

    /// Creates a new room. Used by the seeding routine.
    ///
    /// # Arguments
    /// - `building`: Building name
    /// - `number`: Room number label (string, may be non-numeric)
    /// - `max_capacity`: Optional maximum capacity
    ///
    /// # Returns
    /// - `Ok(Model)`: The created room
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        building: String,
        number: String,
        max_capacity: Option<i32>,
    ) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            building: ActiveValue::Set(building),
            number: ActiveValue::Set(number),
            max_capacity: ActiveValue::Set(max_capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
