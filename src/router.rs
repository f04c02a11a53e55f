use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{home, meeting, report},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/meetings", get(meeting::list).post(meeting::create))
        .route("/meetings/new", get(meeting::new_form))
        .route("/meetings/{meeting_id}/edit", get(meeting::edit_form))
        .route("/meetings/{meeting_id}/update", post(meeting::update))
        .route("/meetings/{meeting_id}/delete", post(meeting::delete))
        .route("/report", get(report::report))
}
