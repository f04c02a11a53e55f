use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::meeting::{CreateMeetingParams, MeetingFilter, UpdateMeetingParams};

/// Repository providing database operations for meetings.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting meeting records. Referential
/// integrity against clubs and rooms is enforced by the store's foreign keys.
pub struct MeetingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeetingRepository<'a> {
    /// Creates a new MeetingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MeetingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new meeting with field values.
    ///
    /// # Arguments
    /// - `params`: Field values for the new meeting
    ///
    /// # Returns
    /// - `Ok(Model)`: The created meeting
    /// - `Err(DbErr)`: Database error (including foreign-key violations for
    ///   unknown club/room ids)
    pub async fn create(
        &self,
        params: CreateMeetingParams,
    ) -> Result<entity::meeting::Model, DbErr> {
        entity::meeting::ActiveModel {
            date: ActiveValue::Set(params.date),
            start_time: ActiveValue::Set(params.start_time),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            description: ActiveValue::Set(params.description),
            club_id: ActiveValue::Set(params.club_id),
            room_id: ActiveValue::Set(params.room_id),
            invited_count: ActiveValue::Set(params.invited_count),
            accepted_count: ActiveValue::Set(params.accepted_count),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a meeting by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Meeting found
    /// - `Ok(None)`: Meeting not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::meeting::Model>, DbErr> {
        entity::prelude::Meeting::find_by_id(id).one(self.db).await
    }

    /// Gets all meetings ordered by (date, start_time) descending, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All meetings for the list view
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::meeting::Model>, DbErr> {
        entity::prelude::Meeting::find()
            .order_by_desc(entity::meeting::Column::Date)
            .order_by_desc(entity::meeting::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Gets the meetings matching a filter, ordered by (date, start_time)
    /// ascending, oldest first.
    ///
    /// The date range bounds are inclusive. Absent filter fields leave the
    /// corresponding column unconstrained.
    ///
    /// # Arguments
    /// - `filter`: Optional club, room, and inclusive date-range constraints
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Matching meetings for the report view
    /// - `Err(DbErr)`: Database error
    pub async fn get_filtered(
        &self,
        filter: &MeetingFilter,
    ) -> Result<Vec<entity::meeting::Model>, DbErr> {
        let mut query = entity::prelude::Meeting::find();

        if let Some(club_id) = filter.club_id {
            query = query.filter(entity::meeting::Column::ClubId.eq(club_id));
        }
        if let Some(room_id) = filter.room_id {
            query = query.filter(entity::meeting::Column::RoomId.eq(room_id));
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(entity::meeting::Column::Date.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(entity::meeting::Column::Date.lte(date_to));
        }

        query
            .order_by_asc(entity::meeting::Column::Date)
            .order_by_asc(entity::meeting::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Overwrites all mutable fields of a meeting in place.
    ///
    /// # Arguments
    /// - `id`: Meeting ID
    /// - `params`: New field values
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated meeting
    /// - `Err(DbErr::RecordNotFound)`: No meeting with this id
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMeetingParams,
    ) -> Result<entity::meeting::Model, DbErr> {
        let meeting = entity::prelude::Meeting::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Meeting {} not found", id)))?;

        let mut active_model: entity::meeting::ActiveModel = meeting.into();

        active_model.date = ActiveValue::Set(params.date);
        active_model.start_time = ActiveValue::Set(params.start_time);
        active_model.duration_minutes = ActiveValue::Set(params.duration_minutes);
        active_model.description = ActiveValue::Set(params.description);
        active_model.club_id = ActiveValue::Set(params.club_id);
        active_model.room_id = ActiveValue::Set(params.room_id);
        active_model.invited_count = ActiveValue::Set(params.invited_count);
        active_model.accepted_count = ActiveValue::Set(params.accepted_count);

        active_model.update(self.db).await
    }

    /// Deletes a meeting by ID.
    ///
    /// # Arguments
    /// - `id`: Meeting ID
    ///
    /// # Returns
    /// - `Ok(true)`: Meeting deleted
    /// - `Ok(false)`: No meeting with this id
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Meeting::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts all meetings.
    ///
    /// # Returns
    /// - `Ok(count)`: Total number of meetings
    /// - `Err(DbErr)`: Database error
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Meeting::find().count(self.db).await
    }
}
