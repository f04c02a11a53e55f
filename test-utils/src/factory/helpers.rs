//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a meeting with all its dependencies.
///
/// This is a convenience method that creates:
/// 1. Club
/// 2. Room
/// 3. Meeting linking the two
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((club, room, meeting))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_meeting_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::club::Model,
        entity::room::Model,
        entity::meeting::Model,
    ),
    DbErr,
> {
    let club = crate::factory::club::create_club(db).await?;
    let room = crate::factory::room::create_room(db).await?;
    let meeting = crate::factory::meeting::create_meeting(db, club.club_id, room.room_id).await?;

    Ok((club, room, meeting))
}

/// Creates a club and room pair without any meetings.
///
/// Useful when a test wants to control every field of the meetings it
/// creates but still needs valid foreign-key targets.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((club, room))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_meeting_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::club::Model, entity::room::Model), DbErr> {
    let club = crate::factory::club::create_club(db).await?;
    let room = crate::factory::room::create_room(db).await?;

    Ok((club, room))
}
