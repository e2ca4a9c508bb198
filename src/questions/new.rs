use axum::{Json, debug_handler, extract::State, http::StatusCode};
use sqlx::SqlitePool;

use super::{CreatedQuestion, NewQuestionRequest, QUESTIONS_TAG, store::QuestionStore};
use crate::{AppError, AppResult, error::ErrorBody, uuid_guard};

#[utoipa::path(
    post,
    path = "/questions",
    tag = QUESTIONS_TAG,
    request_body = NewQuestionRequest,
    responses(
        (status = 201, description = "The created question", body = CreatedQuestion),
        (status = 400, description = "Room identifier is not a UUID, or empty question", body = ErrorBody),
        (status = 404, description = "No room with this identifier", body = ErrorBody),
    ),
)]
#[debug_handler]
pub(crate) async fn create_question(
    State(db_pool): State<SqlitePool>,
    Json(body): Json<NewQuestionRequest>,
) -> AppResult<(StatusCode, Json<CreatedQuestion>)> {
    if body.question.is_empty() {
        return Err(AppError::InvalidPayload("question must not be empty".to_owned()));
    }
    if !uuid_guard::is_uuid(&body.room_id) {
        log::debug!("rejected room id {:?}", body.room_id);
        return Err(AppError::InvalidUuid);
    }

    let question = QuestionStore::new(&db_pool)
        .create(&body.room_id, &body.question)
        .await?;

    Ok((StatusCode::CREATED, Json(question)))
}
