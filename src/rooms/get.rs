use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use sqlx::SqlitePool;

use super::{ROOMS_TAG, RoomDetail, store::RoomStore};
use crate::{AppError, AppResult, error::ErrorBody, uuid_guard};

#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = ROOMS_TAG,
    params(("id" = String, Path, description = "Room identifier (version-4 UUID)")),
    responses(
        (status = 200, description = "The room", body = RoomDetail),
        (status = 400, description = "Identifier is not a version-4 UUID", body = ErrorBody),
        (status = 404, description = "No room with this identifier", body = ErrorBody),
    ),
)]
#[debug_handler]
pub(crate) async fn get_room(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> AppResult<Json<RoomDetail>> {
    // room lookups require a version-4 id, unlike the question listing
    if !uuid_guard::is_uuid_v4(&id) {
        log::debug!("rejected room id {id:?}");
        return Err(AppError::InvalidUuid);
    }

    let room = RoomStore::new(&db_pool)
        .get(&id)
        .await?
        .ok_or(AppError::RoomNotFound)?;

    Ok(Json(room))
}
