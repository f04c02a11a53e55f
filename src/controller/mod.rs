//! HTTP request handlers.
//!
//! Controllers validate and convert boundary input, call into the service
//! layer, and map outcomes to responses: JSON payloads for reads, 303
//! redirects for form submissions, and `AppError` for failures.

pub mod home;
pub mod meeting;
pub mod report;
