//! Database connection and idempotent seeding, run once before serving traffic.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    config::Config,
    data::{club::ClubRepository, meeting::MeetingRepository, room::RoomRepository},
    error::AppError,
    model::meeting::CreateMeetingParams,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up to date. This must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the fixed clubs and rooms when their tables are empty.
///
/// Idempotent: a non-empty table is left untouched, so this is safe to run
/// on every startup. Clubs and rooms have no create routes; this is the only
/// place they come from.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - Reference data present
/// - `Err(AppError)` - Database error during seeding
pub async fn seed_reference_data(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let clubs = ClubRepository::new(db);
    if clubs.count().await? == 0 {
        for name in ["Chess Club", "Robotics", "Art Society"] {
            clubs.create(name.to_string()).await?;
        }
        tracing::info!("seeded default clubs");
    }

    let rooms = RoomRepository::new(db);
    if rooms.count().await? == 0 {
        rooms
            .create("Eng".to_string(), "101".to_string(), Some(40))
            .await?;
        rooms
            .create("Sci".to_string(), "202".to_string(), Some(60))
            .await?;
        tracing::info!("seeded default rooms");
    }

    Ok(())
}

/// Seeds two example meetings when the meetings table is empty.
///
/// Run only by the explicit `init-db` invocation, after
/// `seed_reference_data`, so club ids 1-2 and room ids 1-2 exist.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - Example meetings present
/// - `Err(AppError)` - Database error during seeding
pub async fn seed_example_meetings(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let meetings = MeetingRepository::new(db);
    if meetings.count().await? > 0 {
        return Ok(());
    }

    meetings
        .create(CreateMeetingParams {
            date: seed_date(2025, 11, 10)?,
            start_time: seed_time(12, 0)?,
            duration_minutes: 60,
            description: Some("Weekly meetup".to_string()),
            club_id: 1,
            room_id: 1,
            invited_count: 20,
            accepted_count: 12,
        })
        .await?;
    meetings
        .create(CreateMeetingParams {
            date: seed_date(2025, 11, 12)?,
            start_time: seed_time(15, 30)?,
            duration_minutes: 90,
            description: Some("Workshop".to_string()),
            club_id: 2,
            room_id: 2,
            invited_count: 35,
            accepted_count: 22,
        })
        .await?;

    tracing::info!("seeded example meetings");

    Ok(())
}

fn seed_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::InternalError(format!("invalid seed date {}-{}-{}", year, month, day))
    })
}

fn seed_time(hour: u32, minute: u32) -> Result<NaiveTime, AppError> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        AppError::InternalError(format!("invalid seed time {}:{}", hour, minute))
    })
}
