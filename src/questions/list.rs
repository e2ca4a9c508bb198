use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use sqlx::SqlitePool;

use super::{QUESTIONS_TAG, QuestionItem, store::QuestionStore};
use crate::{AppError, AppResult, error::ErrorBody, uuid_guard};

#[utoipa::path(
    get,
    path = "/questions/{room_id}",
    tag = QUESTIONS_TAG,
    params(("room_id" = String, Path, description = "Room identifier (any UUID version)")),
    responses(
        (status = 200, description = "Questions of the room, empty for an unknown room", body = [QuestionItem]),
        (status = 400, description = "Identifier is not a UUID", body = ErrorBody),
    ),
)]
#[debug_handler]
pub(crate) async fn list_questions(
    State(db_pool): State<SqlitePool>,
    Path(room_id): Path<String>,
) -> AppResult<Json<Vec<QuestionItem>>> {
    // well-formedness only here, the version nibble is not checked
    if !uuid_guard::is_uuid(&room_id) {
        log::debug!("rejected room id {room_id:?}");
        return Err(AppError::InvalidUuid);
    }

    let questions = QuestionStore::new(&db_pool).list_for_room(&room_id).await?;
    Ok(Json(questions))
}
