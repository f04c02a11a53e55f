//! Domain models, operation parameter types, and HTTP boundary DTOs.
//!
//! Repositories return entity models; the service layer converts them to the
//! domain models defined here and builds DTOs for the controllers. Parameter
//! structs keep repository signatures stable as fields evolve.

pub mod api;
pub mod club;
pub mod meeting;
pub mod report;
pub mod room;
