use sea_orm::DatabaseConnection;

use crate::{
    data::{club::ClubRepository, meeting::MeetingRepository, room::RoomRepository},
    error::AppError,
    model::{
        club::ClubDto,
        meeting::{
            CreateMeetingParams, Meeting, MeetingDto, MeetingFormDto, MeetingFormFields,
            UpdateMeetingParams,
        },
        room::RoomDto,
    },
    util::parse,
};

/// Result of a create or update attempt.
///
/// The past-start check is a soft rejection, not an error: the boundary layer
/// decides how to render it (the controllers redirect back to the originating
/// form). Hard validation failures surface as `AppError::BadRequest` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The meeting was persisted with the submitted values.
    Persisted(Meeting),
    /// The submitted date+time is strictly before local now; nothing was persisted.
    RejectedPastStart,
}

pub struct MeetingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeetingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all meetings for the list view, newest first by (date, start_time).
    ///
    /// # Returns
    /// - `Ok(Vec<MeetingDto>)`: Meetings enriched with club/room display names
    /// - `Err(AppError)`: Database error
    pub async fn list(&self) -> Result<Vec<MeetingDto>, AppError> {
        let meetings = MeetingRepository::new(self.db).get_all().await?;
        let (club_names, room_names) = super::reference_name_maps(self.db).await?;

        Ok(meetings
            .into_iter()
            .map(|m| super::to_meeting_dto(m, &club_names, &room_names))
            .collect())
    }

    /// Builds the payload for the empty create form: club and room choices only.
    ///
    /// # Returns
    /// - `Ok(MeetingFormDto)`: Choices with `meeting` unset
    /// - `Err(AppError)`: Database error
    pub async fn form_choices(&self) -> Result<MeetingFormDto, AppError> {
        Ok(MeetingFormDto {
            meeting: None,
            clubs: self.club_choices().await?,
            rooms: self.room_choices().await?,
        })
    }

    /// Builds the payload for the edit form, pre-filled with the existing meeting.
    ///
    /// # Arguments
    /// - `id`: Meeting ID
    ///
    /// # Returns
    /// - `Ok(MeetingFormDto)`: Existing values plus club/room choices
    /// - `Err(AppError::NotFound)`: No meeting with this id
    pub async fn form_for(&self, id: i32) -> Result<MeetingFormDto, AppError> {
        let meeting = MeetingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Meeting not found".to_string()))?;

        let (club_names, room_names) = super::reference_name_maps(self.db).await?;

        Ok(MeetingFormDto {
            meeting: Some(super::to_meeting_dto(meeting, &club_names, &room_names)),
            clubs: self.club_choices().await?,
            rooms: self.room_choices().await?,
        })
    }

    /// Creates a meeting from submitted form fields.
    ///
    /// Parses and validates the fields, applies the past-start check, and
    /// persists the meeting when it passes. Counts are clamped to ≥ 0.
    ///
    /// # Arguments
    /// - `fields`: Raw form fields
    ///
    /// # Returns
    /// - `Ok(WriteOutcome::Persisted)`: Meeting created
    /// - `Ok(WriteOutcome::RejectedPastStart)`: Date+time is in the past, nothing persisted
    /// - `Err(AppError::BadRequest)`: Malformed or missing fields
    /// - `Err(AppError)`: Database error (including unknown club/room ids)
    pub async fn create(&self, fields: MeetingFormFields) -> Result<WriteOutcome, AppError> {
        let date = parse::parse_date(fields.date.as_deref().unwrap_or(""))?;
        let start_time = parse::parse_time(fields.start_time.as_deref().unwrap_or(""));

        if parse::is_past(date, start_time) {
            return Ok(WriteOutcome::RejectedPastStart);
        }

        let params = CreateMeetingParams {
            date: require_date(date)?,
            start_time: require_time(start_time)?,
            duration_minutes: parse::parse_duration(fields.duration_minutes.as_deref())?,
            description: normalize_description(fields.description),
            club_id: parse::parse_id(fields.club_id.as_deref(), "club_id")?,
            room_id: parse::parse_id(fields.room_id.as_deref(), "room_id")?,
            invited_count: parse::parse_count(fields.invited_count.as_deref())?,
            accepted_count: parse::parse_count(fields.accepted_count.as_deref())?,
        };

        let created = MeetingRepository::new(self.db).create(params).await?;

        Ok(WriteOutcome::Persisted(Meeting::from_entity(created)))
    }

    /// Updates a meeting in place from submitted form fields.
    ///
    /// The past-start check applies to the new values being set. On pass, all
    /// mutable fields are overwritten.
    ///
    /// # Arguments
    /// - `id`: Meeting ID
    /// - `fields`: Raw form fields
    ///
    /// # Returns
    /// - `Ok(WriteOutcome::Persisted)`: Meeting updated
    /// - `Ok(WriteOutcome::RejectedPastStart)`: New date+time is in the past, nothing changed
    /// - `Err(AppError::NotFound)`: No meeting with this id
    /// - `Err(AppError::BadRequest)`: Malformed or missing fields
    pub async fn update(
        &self,
        id: i32,
        fields: MeetingFormFields,
    ) -> Result<WriteOutcome, AppError> {
        let repo = MeetingRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Meeting not found".to_string()))?;

        let date = parse::parse_date(fields.date.as_deref().unwrap_or(""))?;
        let start_time = parse::parse_time(fields.start_time.as_deref().unwrap_or(""));

        if parse::is_past(date, start_time) {
            return Ok(WriteOutcome::RejectedPastStart);
        }

        let params = UpdateMeetingParams {
            date: require_date(date)?,
            start_time: require_time(start_time)?,
            duration_minutes: parse::parse_duration(fields.duration_minutes.as_deref())?,
            description: normalize_description(fields.description),
            club_id: parse::parse_id(fields.club_id.as_deref(), "club_id")?,
            room_id: parse::parse_id(fields.room_id.as_deref(), "room_id")?,
            invited_count: parse::parse_count(fields.invited_count.as_deref())?,
            accepted_count: parse::parse_count(fields.accepted_count.as_deref())?,
        };

        let updated = repo.update(id, params).await?;

        Ok(WriteOutcome::Persisted(Meeting::from_entity(updated)))
    }

    /// Deletes a meeting.
    ///
    /// # Arguments
    /// - `id`: Meeting ID
    ///
    /// # Returns
    /// - `Ok(())`: Meeting removed
    /// - `Err(AppError::NotFound)`: No meeting with this id (including a second delete)
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = MeetingRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Meeting not found".to_string()));
        }

        Ok(())
    }

    async fn club_choices(&self) -> Result<Vec<ClubDto>, AppError> {
        Ok(ClubRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(ClubDto::from_entity)
            .collect())
    }

    async fn room_choices(&self) -> Result<Vec<RoomDto>, AppError> {
        Ok(RoomRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(RoomDto::from_entity)
            .collect())
    }
}

fn require_date(date: Option<chrono::NaiveDate>) -> Result<chrono::NaiveDate, AppError> {
    date.ok_or_else(|| AppError::BadRequest("Missing date".to_string()))
}

fn require_time(time: Option<chrono::NaiveTime>) -> Result<chrono::NaiveTime, AppError> {
    time.ok_or_else(|| AppError::BadRequest("Missing or invalid start_time".to_string()))
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.is_empty())
}
