//! Meeting factory for creating test meeting entities.
//!
//! This module provides factory methods for creating meeting entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test meetings with customizable fields.
///
/// Provides a builder pattern for creating meeting entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::meeting::MeetingFactory;
///
/// let meeting = MeetingFactory::new(&db, club.club_id, room.room_id)
///     .duration_minutes(90)
///     .description(Some("Workshop".to_string()))
///     .build()
///     .await?;
/// ```
pub struct MeetingFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    start_time: NaiveTime,
    duration_minutes: i32,
    description: Option<String>,
    club_id: i32,
    room_id: i32,
    invited_count: i32,
    accepted_count: i32,
}

impl<'a> MeetingFactory<'a> {
    /// Creates a new MeetingFactory with default values.
    ///
    /// Defaults:
    /// - date: one week from today (local)
    /// - start_time: 12:00
    /// - duration_minutes: 60
    /// - description: `Some("Test meeting")`
    /// - invited_count: 0
    /// - accepted_count: 0
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `club_id` - Club ID this meeting belongs to
    /// - `room_id` - Room ID this meeting is held in
    ///
    /// # Returns
    /// - `MeetingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, club_id: i32, room_id: i32) -> Self {
        Self {
            db,
            date: Local::now().date_naive() + Duration::days(7),
            start_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            duration_minutes: 60,
            description: Some("Test meeting".to_string()),
            club_id,
            room_id,
            invited_count: 0,
            accepted_count: 0,
        }
    }

    /// Sets the meeting date.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the start time.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the duration in minutes.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Sets the optional free-text description.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the invited count.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn invited_count(mut self, invited_count: i32) -> Self {
        self.invited_count = invited_count;
        self
    }

    /// Sets the accepted count.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn accepted_count(mut self, accepted_count: i32) -> Self {
        self.accepted_count = accepted_count;
        self
    }

    /// Inserts the meeting into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created meeting entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::meeting::Model, DbErr> {
        entity::meeting::ActiveModel {
            date: ActiveValue::Set(self.date),
            start_time: ActiveValue::Set(self.start_time),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            description: ActiveValue::Set(self.description),
            club_id: ActiveValue::Set(self.club_id),
            room_id: ActiveValue::Set(self.room_id),
            invited_count: ActiveValue::Set(self.invited_count),
            accepted_count: ActiveValue::Set(self.accepted_count),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a meeting with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `club_id` - Club ID this meeting belongs to
/// - `room_id` - Room ID this meeting is held in
///
/// # Returns
/// - `Ok(Model)` - The created meeting entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_meeting(
    db: &DatabaseConnection,
    club_id: i32,
    room_id: i32,
) -> Result<entity::meeting::Model, DbErr> {
    MeetingFactory::new(db, club_id, room_id).build().await
}
