use axum::{Json, debug_handler, extract::State, http::StatusCode};
use sqlx::SqlitePool;

use super::{CreatedRoom, NewRoomRequest, ROOMS_TAG, store::RoomStore};
use crate::{AppError, AppResult, error::ErrorBody};

#[utoipa::path(
    post,
    path = "/rooms",
    tag = ROOMS_TAG,
    request_body = NewRoomRequest,
    responses(
        (status = 201, description = "The created room", body = CreatedRoom),
        (status = 400, description = "Empty room name", body = ErrorBody),
    ),
)]
#[debug_handler]
pub(crate) async fn create_room(
    State(db_pool): State<SqlitePool>,
    Json(body): Json<NewRoomRequest>,
) -> AppResult<(StatusCode, Json<CreatedRoom>)> {
    if body.name.is_empty() {
        return Err(AppError::InvalidPayload("name must not be empty".to_owned()));
    }

    let room = RoomStore::new(&db_pool)
        .create(&body.name, body.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(room)))
}
