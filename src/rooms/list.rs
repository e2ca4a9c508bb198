use axum::{Json, debug_handler, extract::State};
use sqlx::SqlitePool;

use super::{ROOMS_TAG, RoomSummary, store::RoomStore};
use crate::AppResult;

#[utoipa::path(
    get,
    path = "/rooms",
    tag = ROOMS_TAG,
    responses(
        (status = 200, description = "All rooms in creation order, each with its question count", body = [RoomSummary]),
    ),
)]
#[debug_handler]
pub(crate) async fn list_rooms(
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Vec<RoomSummary>>> {
    let rooms = RoomStore::new(&db_pool).list().await?;
    Ok(Json(rooms))
}
