use sea_orm::DatabaseConnection;

use crate::{
    data::meeting::MeetingRepository,
    error::AppError,
    model::{
        meeting::MeetingFilter,
        report::{ReportDto, ReportQuery, ReportStatsDto},
    },
    util::parse,
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the report for the given query parameters.
    ///
    /// Filters meetings by optional club, room, and inclusive date range,
    /// orders them oldest first by (date, start_time), and computes the four
    /// aggregates over the matching set. The raw query is echoed back in the
    /// response so the filter controls can be re-populated.
    ///
    /// # Arguments
    /// - `query`: Raw query parameters as submitted
    ///
    /// # Returns
    /// - `Ok(ReportDto)`: Filter echo, stats, and matching rows
    /// - `Err(AppError::BadRequest)`: Malformed id or date parameter
    /// - `Err(AppError)`: Database error
    pub async fn build(&self, query: ReportQuery) -> Result<ReportDto, AppError> {
        let filter = MeetingFilter {
            club_id: parse::parse_optional_id(query.club_id.as_deref(), "club_id")?,
            room_id: parse::parse_optional_id(query.room_id.as_deref(), "room_id")?,
            date_from: parse::parse_date(query.date_from.as_deref().unwrap_or(""))?,
            date_to: parse::parse_date(query.date_to.as_deref().unwrap_or(""))?,
        };

        let meetings = MeetingRepository::new(self.db).get_filtered(&filter).await?;
        let stats = compute_stats(&meetings);

        let (club_names, room_names) = super::reference_name_maps(self.db).await?;
        let rows = meetings
            .into_iter()
            .map(|m| super::to_meeting_dto(m, &club_names, &room_names))
            .collect();

        Ok(ReportDto {
            filters: query,
            stats,
            rows,
        })
    }
}

/// Computes the four aggregates over the matching rows.
///
/// All averages are 0 when the set is empty. The attendance rate averages
/// accepted/invited only over rows with invited_count > 0, so a row with zero
/// invited never contributes a division by zero; it still counts toward the
/// other three averages.
fn compute_stats(rows: &[entity::meeting::Model]) -> ReportStatsDto {
    let n = rows.len();
    if n == 0 {
        return ReportStatsDto {
            avg_duration: 0.0,
            avg_invited: 0.0,
            avg_accepted: 0.0,
            avg_attendance_rate: 0.0,
        };
    }

    let count = n as f64;
    let avg_duration = rows.iter().map(|m| m.duration_minutes as f64).sum::<f64>() / count;
    let avg_invited = rows.iter().map(|m| m.invited_count as f64).sum::<f64>() / count;
    let avg_accepted = rows.iter().map(|m| m.accepted_count as f64).sum::<f64>() / count;

    let rates: Vec<f64> = rows
        .iter()
        .filter(|m| m.invited_count > 0)
        .map(|m| m.accepted_count as f64 / m.invited_count as f64)
        .collect();
    let avg_attendance_rate = if rates.is_empty() {
        0.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    };

    ReportStatsDto {
        avg_duration: round_to(avg_duration, 2),
        avg_invited: round_to(avg_invited, 2),
        avg_accepted: round_to(avg_accepted, 2),
        avg_attendance_rate: round_to(avg_attendance_rate, 3),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
