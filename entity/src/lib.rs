//! SeaORM entity definitions for the meetboard database schema.
//!
//! Contains the `clubs`, `rooms`, and `meetings` tables along with their
//! relations. The `prelude` module re-exports each entity under its
//! domain name for concise use in queries.

pub mod club;
pub mod meeting;
pub mod prelude;
pub mod room;
