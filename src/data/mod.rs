//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! them to the service layer, which converts to domain models. All database queries,
//! inserts, updates, and deletes are performed through these repositories.

pub mod club;
pub mod meeting;
pub mod room;

#[cfg(test)]
mod test;
