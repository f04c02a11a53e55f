//! Domain models and parameter types for meeting operations.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled meeting linking one club and one room.
///
/// Flat record with no internal state machine; rows are created, updated in
/// place, or deleted directly by user action through the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    /// Unique identifier for the meeting.
    pub meeting_id: i32,
    /// Calendar date of the meeting.
    pub date: NaiveDate,
    /// Wall-clock start time, no timezone.
    pub start_time: NaiveTime,
    /// Duration in minutes.
    pub duration_minutes: i32,
    /// Optional free-text description.
    pub description: Option<String>,
    /// ID of the club holding the meeting.
    pub club_id: i32,
    /// ID of the room the meeting is held in.
    pub room_id: i32,
    /// Number of people invited. Non-negative after input clamping.
    pub invited_count: i32,
    /// Number of people who accepted. Not capped at invited_count.
    pub accepted_count: i32,
}

impl Meeting {
    /// Converts an entity model to a meeting domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Meeting` - The converted meeting domain model
    pub fn from_entity(entity: entity::meeting::Model) -> Self {
        Self {
            meeting_id: entity.meeting_id,
            date: entity.date,
            start_time: entity.start_time,
            duration_minutes: entity.duration_minutes,
            description: entity.description,
            club_id: entity.club_id,
            room_id: entity.room_id,
            invited_count: entity.invited_count,
            accepted_count: entity.accepted_count,
        }
    }
}

/// Parameters for creating a new meeting.
#[derive(Debug, Clone)]
pub struct CreateMeetingParams {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i32,
    pub description: Option<String>,
    pub club_id: i32,
    pub room_id: i32,
    pub invited_count: i32,
    pub accepted_count: i32,
}

/// Parameters for overwriting all mutable fields of an existing meeting.
#[derive(Debug, Clone)]
pub struct UpdateMeetingParams {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i32,
    pub description: Option<String>,
    pub club_id: i32,
    pub room_id: i32,
    pub invited_count: i32,
    pub accepted_count: i32,
}

/// Optional filters applied to meeting collection queries.
///
/// The date range is inclusive on both ends. Absent fields leave the
/// corresponding column unconstrained.
#[derive(Debug, Clone, Default)]
pub struct MeetingFilter {
    pub club_id: Option<i32>,
    pub room_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Raw form fields submitted by the create and update forms.
///
/// Everything arrives as optional strings so the parsing policy (empty means
/// absent, malformed means 400, counts clamped to zero) lives in one place,
/// `util::parse`, rather than in serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingFormFields {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub duration_minutes: Option<String>,
    pub description: Option<String>,
    pub club_id: Option<String>,
    pub room_id: Option<String>,
    pub invited_count: Option<String>,
    pub accepted_count: Option<String>,
}

/// Meeting row enriched with display names for its club and room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDto {
    pub meeting_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i32,
    pub description: Option<String>,
    pub club_id: i32,
    pub club_name: String,
    pub room_id: i32,
    pub room_name: String,
    pub invited_count: i32,
    pub accepted_count: i32,
}

/// Payload backing the create and edit forms.
///
/// `meeting` is `None` for the empty create form and pre-filled for edit.
#[derive(Serialize, Deserialize)]
pub struct MeetingFormDto {
    pub meeting: Option<MeetingDto>,
    pub clubs: Vec<crate::model::club::ClubDto>,
    pub rooms: Vec<crate::model::room::RoomDto>,
}
