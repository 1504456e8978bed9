//! Minutes endpoints: create, list and update records

use crate::domain::{split_attendees, MeetingRecord};
use crate::error::{AppError, Result};
use crate::routes::extract::{FormBody, JsonBody};
use crate::routes::{soft_failure, AuthenticatedUser};
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Form fields for a new record
#[derive(Debug, Deserialize)]
pub struct SaveMinutesForm {
    pub date: String,
    pub location: String,
    /// Comma-separated attendee names
    pub attendees: String,
    pub content: String,
}

/// Attendees in an update body, either a list or a comma-separated string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AttendeesInput {
    List(Vec<String>),
    Joined(String),
}

impl AttendeesInput {
    fn into_list(self) -> Vec<String> {
        match self {
            AttendeesInput::List(list) => list,
            AttendeesInput::Joined(joined) => split_attendees(&joined),
        }
    }
}

/// JSON body of an update; every field is replaced, absent ones become empty
#[derive(Debug, Deserialize)]
pub struct UpdateMinutesRequest {
    pub index: Option<i64>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub attendees: Option<AttendeesInput>,
    pub content: Option<String>,
}

impl UpdateMinutesRequest {
    fn into_record(self) -> MeetingRecord {
        MeetingRecord::new(
            self.date.unwrap_or_default(),
            self.location.unwrap_or_default(),
            self.attendees
                .map(AttendeesInput::into_list)
                .unwrap_or_default(),
            self.content.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub message: &'static str,
    pub data: MeetingRecord,
}

#[derive(Debug, Serialize)]
pub struct MinutesList {
    pub minutes: Vec<MeetingRecord>,
}

/// Append a record; open to unauthenticated callers
pub async fn save_minutes(
    State(state): State<AppState>,
    FormBody(form): FormBody<SaveMinutesForm>,
) -> Response {
    let record =
        MeetingRecord::from_attendee_list(form.date, form.location, &form.attendees, form.content);

    match state.minutes.append(record).await {
        Ok(record) => Json(RecordResponse {
            message: "회의록이 저장되었습니다.",
            data: record,
        })
        .into_response(),
        Err(e) => soft_failure(state.strict_errors, e),
    }
}

/// List every record in insertion order
pub async fn list_minutes(
    AuthenticatedUser(user): AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<MinutesList>> {
    let minutes = state.minutes.list().await?;
    log::debug!("{} listed {} minutes records", user, minutes.len());

    Ok(Json(MinutesList { minutes }))
}

/// Replace the record at the given index
pub async fn update_minutes(
    AuthenticatedUser(user): AuthenticatedUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateMinutesRequest>,
) -> Result<Json<RecordResponse>> {
    let index = request.index.ok_or(AppError::MissingIndex)?;

    let record = state
        .minutes
        .update_at(index, request.into_record())
        .await
        .map_err(|e| {
            log::warn!("{} failed to update minutes #{}: {}", user, index, e);
            e
        })?;

    log::info!("{} updated minutes #{}", user, index);
    Ok(Json(RecordResponse {
        message: "수정 완료",
        data: record,
    }))
}
