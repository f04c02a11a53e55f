//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// Provides a builder pattern for creating room entities with default
/// values that can be overridden as needed for specific test scenarios.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    building: String,
    number: String,
    max_capacity: Option<i32>,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - building: `"Building {id}"` where id is auto-incremented
    /// - number: `"101"`
    /// - max_capacity: `Some(40)`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RoomFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            building: format!("Building {}", id),
            number: "101".to_string(),
            max_capacity: Some(40),
        }
    }

    /// Sets the building name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    /// Sets the room number label.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the optional maximum capacity.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn max_capacity(mut self, max_capacity: Option<i32>) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Inserts the room into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created room entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            building: ActiveValue::Set(self.building),
            number: ActiveValue::Set(self.number),
            max_capacity: ActiveValue::Set(self.max_capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created room entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}

/// Creates a room in a specific building with a specific number.
///
/// # Arguments
/// - `db` - Database connection
/// - `building` - Building name
/// - `number` - Room number label
///
/// # Returns
/// - `Ok(Model)` - The created room entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_at(
    db: &DatabaseConnection,
    building: impl Into<String>,
    number: impl Into<String>,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).building(building).number(number).build().await
}
