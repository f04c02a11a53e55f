use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

/// Repository providing read and seed operations for clubs.
///
/// Clubs are created by startup seeding only; no route mutates them.
pub struct ClubRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all clubs ordered by name ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All clubs, name-sorted
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::club::Model>, DbErr> {
        entity::prelude::Club::find()
            .order_by_asc(entity::club::Column::Name)
            .all(self.db)
            .await
    }

    /// Counts all clubs.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of clubs
    /// - `Err(DbErr)`: Database error
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Club::find().count(self.db).await
    }

    /// Creates a new club. Used by the seeding routine.
    ///
    /// # Arguments
    /// - `name`: Unique display name
    ///
    /// # Returns
    /// - `Ok(Model)`: The created club
    /// - `Err(DbErr)`: Database error (including unique-name violations)
    pub async fn create(&self, name: String) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
