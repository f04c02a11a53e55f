//! Report filter echo and aggregate statistics types.

use serde::{Deserialize, Serialize};

use crate::model::meeting::MeetingDto;

/// Raw report query parameters as submitted, echoed back in the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportQuery {
    pub club_id: Option<String>,
    pub room_id: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Aggregate statistics over the matching meetings.
///
/// All averages are 0 when the matching set is empty. The attendance rate
/// averages accepted/invited only over rows with invited_count > 0; rows
/// with zero invited are excluded from that denominator set but still count
/// toward the other three averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStatsDto {
    /// Mean duration in minutes, rounded to 2 decimal places.
    pub avg_duration: f64,
    /// Mean invited count, rounded to 2 decimal places.
    pub avg_invited: f64,
    /// Mean accepted count, rounded to 2 decimal places.
    pub avg_accepted: f64,
    /// Mean attendance rate over eligible rows, rounded to 3 decimal places.
    pub avg_attendance_rate: f64,
}

/// Rendered report: filter echo, computed stats, and the matching rows
/// ordered oldest-first by (date, start_time).
#[derive(Serialize, Deserialize)]
pub struct ReportDto {
    pub filters: ReportQuery,
    pub stats: ReportStatsDto,
    pub rows: Vec<MeetingDto>,
}
