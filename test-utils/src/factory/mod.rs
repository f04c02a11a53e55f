//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let club = factory::club::create_club(&db).await?;
//!     let room = factory::room::create_room(&db).await?;
//!
//!     // Create with all dependencies
//!     let (club, room, meeting) =
//!         factory::helpers::create_meeting_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::meeting::MeetingFactory;
//!
//! let meeting = MeetingFactory::new(&db, club.club_id, room.room_id)
//!     .invited_count(20)
//!     .accepted_count(12)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `club` - Create club entities
//! - `room` - Create room entities
//! - `meeting` - Create meeting entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod club;
pub mod helpers;
pub mod meeting;
pub mod room;

// Re-export commonly used factory functions for concise usage
pub use club::create_club;
pub use meeting::create_meeting;
pub use room::create_room;
