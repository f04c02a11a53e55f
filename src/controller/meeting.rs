use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};

use crate::{
    error::AppError,
    model::meeting::MeetingFormFields,
    service::meeting::{MeetingService, WriteOutcome},
    state::AppState,
};

/// GET /meetings
/// Lists all meetings, newest first by (date, start_time).
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let meetings = MeetingService::new(&state.db).list().await?;

    Ok(Json(meetings))
}

/// GET /meetings/new
/// Payload for the empty create form: club and room choices.
pub async fn new_form(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let form = MeetingService::new(&state.db).form_choices().await?;

    Ok(Json(form))
}

/// POST /meetings
/// Creates a meeting from the submitted form. Redirects to the list on
/// success, or back to the create form when the start is in the past.
pub async fn create(
    State(state): State<AppState>,
    Form(fields): Form<MeetingFormFields>,
) -> Result<impl IntoResponse, AppError> {
    match MeetingService::new(&state.db).create(fields).await? {
        WriteOutcome::Persisted(_) => Ok(Redirect::to("/meetings")),
        WriteOutcome::RejectedPastStart => Ok(Redirect::to("/meetings/new?notice=past")),
    }
}

/// GET /meetings/{id}/edit
/// Payload for the edit form, pre-filled with existing values. 404 when the
/// meeting id is unknown.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(meeting_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let form = MeetingService::new(&state.db).form_for(meeting_id).await?;

    Ok(Json(form))
}

/// POST /meetings/{id}/update
/// Overwrites the meeting with the submitted form. Redirects like create,
/// back to the edit form on past-start rejection. 404 when the id is unknown.
pub async fn update(
    State(state): State<AppState>,
    Path(meeting_id): Path<i32>,
    Form(fields): Form<MeetingFormFields>,
) -> Result<impl IntoResponse, AppError> {
    match MeetingService::new(&state.db).update(meeting_id, fields).await? {
        WriteOutcome::Persisted(_) => Ok(Redirect::to("/meetings")),
        WriteOutcome::RejectedPastStart => Ok(Redirect::to(&format!(
            "/meetings/{}/edit?notice=past",
            meeting_id
        ))),
    }
}

/// POST /meetings/{id}/delete
/// Deletes the meeting and redirects to the list. 404 when the id is unknown,
/// including on a repeated delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(meeting_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    MeetingService::new(&state.db).delete(meeting_id).await?;

    Ok(Redirect::to("/meetings"))
}
