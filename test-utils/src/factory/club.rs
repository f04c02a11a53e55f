//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs with customizable fields.
///
/// Provides a builder pattern for creating club entities with default
/// values that can be overridden as needed for specific test scenarios.
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Club {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClubFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Club {}", id),
        }
    }

    /// Sets the club name.
    ///
    /// # Arguments
    /// - `name` - Display name for the club
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Inserts the club into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created club entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created club entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}

/// Creates a club with a specific name.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Display name for the club
///
/// # Returns
/// - `Ok(Model)` - The created club entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_named_club(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).name(name).build().await
}
